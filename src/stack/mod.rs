mod array;
pub use array::*;

mod linked;
pub use linked::*;

mod kind;
pub use kind::*;

mod any;
pub use any::*;
