pub mod alert_event;
pub mod alignment;
pub mod cipher;
pub mod entity;
pub mod fusion_result;
pub mod metric;
pub mod numerology;

pub use alert_event::{AlertEvent, AlertKind};
pub use alignment::{AlignmentFeatures, BirthdayAlignment};
pub use cipher::CipherSet;
pub use entity::{EntityInput, EntityScore};
pub use fusion_result::{ConfidenceBand, FusionResult};
pub use metric::{CompositeScore, MetricContribution, MetricRange, MetricType};
pub use numerology::DateNumerology;
