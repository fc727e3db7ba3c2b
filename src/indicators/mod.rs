pub mod error;
pub mod pipeline;
pub mod validation;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use error::IndicatorError;
pub use pipeline::IndicatorPipeline;
pub use validation::validate_series;
