//! Built-in value factories.
//!
//! Every factory here is pure in `(index, construction parameters)`; random
//! factories carry a fixed seed and derive a fresh RNG per index.

mod choice;
mod counter;
mod numeric;
mod temporal;
mod text;

pub use choice::ChoiceFactory;
pub use counter::{ConstantFactory, CountingFactory, PrefixedCountingFactory};
pub use numeric::{RandomFloatFactory, RandomIntFactory};
pub use temporal::{
    DateIntervalFactory, DateTimeIntervalFactory, RandomDateFactory, RandomDateTimeFactory,
};
pub use text::{EmailFactory, FirstNameFactory, RandomStringFactory, WordFactory};
