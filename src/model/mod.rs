pub use genetica_core::{GrnLogic, PromoterLogic, RegulatoryUnitLogic};
pub mod body_plan {
    pub use genetica_core::body_plan::*;
}
pub mod config {
    pub use genetica_core::config::*;
}
pub mod decoder {
    pub use genetica_core::decoder::*;
}
pub mod error {
    pub use genetica_core::error::*;
}
pub mod grn {
    pub use genetica_core::grn::*;
}
pub mod metrics {
    pub use genetica_core::metrics::*;
}
pub mod sequencer {
    pub use genetica_core::sequencer::*;
}

pub mod state {
    pub use genetica_data::*;
}
