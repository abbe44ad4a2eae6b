//! Concurrent mappings with independent converter tables.

use std::thread;

use object_mapper::{ConvertError, Converters, MapOptions, Mappable, Mapper, Reflected};
use rstest::rstest;

#[derive(Mappable)]
#[mapper(read_only)]
struct Reading {
    pub sensor: String,
    pub value: i32,
}

#[derive(Debug, Default, PartialEq, Mappable)]
struct Label {
    pub sensor: String,
    pub value: String,
}

fn suffixing(unit: &'static str) -> Converters {
    Converters::new().with::<String, _>(move |source| match source.reflect() {
        Reflected::Scalar(value) => Ok(format!("{value}{unit}")),
        Reflected::Str(text) => Ok(text.to_owned()),
        _ => Err(ConvertError::unexpected_source("a scalar", source.type_key())),
    })
}

#[rstest]
fn threads_use_their_own_converters() -> anyhow::Result<()> {
    let readings: Vec<Reading> = (0..32)
        .map(|value| Reading {
            sensor: format!("s{value}"),
            value,
        })
        .collect();
    let celsius = Mapper::new(MapOptions::new().with_converters(suffixing("C")));
    let percent = Mapper::new(MapOptions::new().with_converters(suffixing("%")));

    let (left, right) = thread::scope(|scope| {
        let first = scope.spawn(|| {
            let mut labels: Vec<Label> = Vec::new();
            celsius.map(&readings, &mut labels).map(|()| labels)
        });
        let second = scope.spawn(|| {
            let mut labels: Vec<Label> = Vec::new();
            percent.map(&readings, &mut labels).map(|()| labels)
        });
        (first.join(), second.join())
    });
    let (Ok(celsius_result), Ok(percent_result)) = (left, right) else {
        anyhow::bail!("mapping thread panicked");
    };
    let celsius_labels = celsius_result?;
    let percent_labels = percent_result?;

    assert_eq!(celsius_labels.len(), 32);
    assert!(celsius_labels.iter().all(|label| label.value.ends_with('C')));
    assert!(percent_labels.iter().all(|label| label.value.ends_with('%')));
    assert_eq!(
        percent_labels.last(),
        Some(&Label {
            sensor: "s31".into(),
            value: "31%".into(),
        })
    );
    Ok(())
}

#[rstest]
fn mappers_can_be_shared_across_threads() {
    let mapper = Mapper::default();
    let outputs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4_u8)
            .map(|index| {
                let shared = &mapper;
                scope.spawn(move || {
                    let mut text = String::new();
                    shared.map(&index, &mut text).map(|()| text)
                })
            })
            .collect();
        handles
            .into_iter()
            .filter_map(|handle| handle.join().ok())
            .filter_map(Result::ok)
            .collect()
    });
    assert_eq!(outputs, vec!["0", "1", "2", "3"]);
}
