use std::fmt;

use object_mapper::{Mappable, MapResult, map};

#[derive(Mappable)]
#[mapper(read_only, methods(full_name))]
struct Account {
    pub first: String,
    pub last: String,
    pub code: String,
}

impl Account {
    fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

#[derive(Debug, Default, Clone, Mappable)]
#[mapper(opaque)]
struct Token(String);

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default, Mappable)]
#[mapper(crate = "object_mapper")]
struct AccountView {
    #[mapper(from_method = "full_name")]
    pub name: String,
    #[mapper(from_field = "code")]
    pub reference: String,
    #[mapper(directive = "fromMethod:missing;fromField:last")]
    pub surname: String,
    #[mapper(skip)]
    pub token: Token,
}

fn main() {
    let source = Account {
        first: "Ada".into(),
        last: "Lovelace".into(),
        code: "AL-1".into(),
    };
    let mut target = AccountView::default();
    let result: MapResult<()> = map(&source, &mut target);
    let _ = (result, target.name, target.reference, target.surname, target.token);
}
