//! Trybuild fixture verifying `#[mapper(crate = "...")]` works with a
//! dependency renamed via `use ... as`.

use object_mapper as mapping;
use mapping::Mappable;

#[derive(Debug, Default, Mappable)]
#[mapper(crate = "mapping")]
struct Renamed {
    pub value: String,
    pub count: u32,
}

fn main() {
    let mut target = Renamed::default();
    let result: mapping::MapResult<()> = mapping::map(&7_u32, &mut target.count);
    let _ = (result, target.value);
}
