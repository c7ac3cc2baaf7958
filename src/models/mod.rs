pub mod diagnosis;
pub mod enums;
pub mod medication;
pub mod note;
pub mod order;
pub mod patient;
pub mod procedure;
pub mod report;
pub mod surgery;
pub mod visit;

pub use diagnosis::*;
pub use enums::*;
pub use medication::*;
pub use note::*;
pub use order::*;
pub use patient::*;
pub use procedure::*;
pub use report::*;
pub use surgery::*;
pub use visit::*;
