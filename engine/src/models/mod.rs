pub mod indicator_series;
pub mod lookback;
pub mod price_bar;
pub mod price_series;

pub use indicator_series::*;
pub use lookback::*;
pub use price_bar::*;
pub use price_series::*;
