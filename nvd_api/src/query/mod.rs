mod params;
pub use self::params::{Parameter, ParameterKind, ParameterSpec, Pattern};

mod cve;
pub use self::cve::{translate, CveQuery, ParamValue, TranslatedQuery};
