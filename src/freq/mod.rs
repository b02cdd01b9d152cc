pub mod alphabet;
mod counts;
mod input;
mod table;

pub use counts::MutationCounts;
pub use input::count_mutations;
pub use table::{FreqRow, FrequencyTable};
