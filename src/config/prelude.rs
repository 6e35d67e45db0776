//! Re-exports

pub use super::inputoutput::DataOutputFormat;
pub use super::inputoutput::DataOutputMode;
pub use super::inputoutput::InputOutputOpt;
pub use super::lib::Config;
pub use super::test_util::MockConfig;
pub use super::trial::TrialOpt;
pub use super::util::UtilOpt;
