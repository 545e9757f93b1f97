pub mod mock_assembly;
pub mod traits;
pub mod types;

pub use mock_assembly::MockAssembly;
pub use traits::AssemblyModel;
pub use types::*;
