pub mod body;
pub mod sight;
pub mod terrain;
pub mod test_comp;

pub use self::{
    body::*,
    sight::*,
    terrain::*,
};
