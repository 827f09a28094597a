pub mod conversion;
pub mod definition;
pub mod legacy;

pub use conversion::*;
pub use definition::*;
pub use legacy::{LegacyGenerationForm, image_from_data_url};
