use std::fmt::{Display, Formatter};

quantity!(Pence, "p");

impl Pence {
    #[must_use]
    pub fn to_pounds(self) -> Pounds {
        Pounds(self.0 / 100.0)
    }
}

/// Display-only wrapper: the API reports costs in pence, people read pounds.
#[derive(Copy, Clone)]
pub struct Pounds(pub f64);

impl Display for Pounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "£{:.2}", self.0)
    }
}
