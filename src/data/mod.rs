mod model;

pub use model::GenerationRequestFile;
