//! Field and method redirections declared on target fields.

use object_mapper::{MapResult, Mappable, map};
use rstest::rstest;

#[derive(Mappable)]
#[mapper(read_only)]
struct Citizen {
    pub id: i64,
    pub name: String,
    pub family_name: String,
}

#[derive(Debug, Default, PartialEq, Mappable)]
struct CitizenCard {
    pub id: i64,
    #[mapper(from_field = "name")]
    pub first_name: String,
    #[mapper(directive = "fromField:family_name")]
    pub last_name: String,
}

#[rstest]
fn reads_redirected_fields() -> MapResult<()> {
    let source = Citizen {
        id: 120,
        name: "John".into(),
        family_name: "Doe".into(),
    };
    let mut target = CitizenCard::default();
    map(&source, &mut target)?;
    assert_eq!(
        target,
        CitizenCard {
            id: 120,
            first_name: "John".into(),
            last_name: "Doe".into(),
        }
    );
    Ok(())
}

#[derive(Mappable)]
#[mapper(read_only, methods(full_name, has_passed, grade, rank))]
struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub score: f64,
}

#[derive(Debug)]
struct NotGraded;

impl Student {
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn has_passed(&self) -> bool {
        self.score >= 70.0
    }

    fn grade(&self) -> Result<char, NotGraded> {
        if self.score >= 90.0 {
            Ok('A')
        } else if self.score > 0.0 {
            Ok('B')
        } else {
            Err(NotGraded)
        }
    }

    fn rank(&self) -> (u32, &'static str) {
        (u32::from(self.has_passed()) + 1, "computed")
    }
}

#[derive(Debug, Default, PartialEq, Mappable)]
struct Transcript {
    pub id: i64,
    #[mapper(from_method = "full_name")]
    pub full_name: String,
    #[mapper(from_method = "has_passed")]
    pub passed: bool,
    #[mapper(directive = "fromMethod:grade;fromField:last_name")]
    pub grade: String,
    #[mapper(from_method = "rank")]
    pub rank: u32,
}

#[rstest]
#[case::passed(86.5, "B", true, 2)]
#[case::excellent(95.0, "A", true, 2)]
#[case::ungraded(0.0, "Doe", false, 1)]
fn calls_accessors(
    #[case] score: f64,
    #[case] grade: &str,
    #[case] passed: bool,
    #[case] rank: u32,
) -> MapResult<()> {
    let source = Student {
        id: 120,
        first_name: "John".into(),
        last_name: "Doe".into(),
        score,
    };
    let mut target = Transcript::default();
    map(&source, &mut target)?;
    assert_eq!(
        target,
        Transcript {
            id: 120,
            full_name: "John Doe".into(),
            passed,
            grade: grade.into(),
            rank,
        }
    );
    Ok(())
}

#[derive(Debug, Default, PartialEq, Mappable)]
struct Fallbacks {
    #[mapper(from_method = "unregistered")]
    pub first_name: String,
    #[mapper(directive = "json:ignored;omitempty;fromMethod:unregistered;fromField:last_name")]
    pub surname: String,
    #[mapper(from_field = "missing", from_method = "full_name")]
    pub display: String,
}

#[rstest]
fn unknown_methods_fall_through_and_absent_fields_settle() -> MapResult<()> {
    let source = Student {
        id: 1,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        score: 99.0,
    };
    let mut target = Fallbacks {
        display: "kept".into(),
        ..Fallbacks::default()
    };
    map(&source, &mut target)?;
    assert_eq!(
        target,
        Fallbacks {
            first_name: "Ada".into(),
            surname: "Lovelace".into(),
            display: "kept".into(),
        }
    );
    Ok(())
}
