mod response;
pub use self::response::{CveResponse, VulnerabilityRecord};

mod values;
pub use self::values::{CvssV2Severity, CvssV3Severity, VersionType};
