mod curve;
mod design;
mod params;
mod scenario;

pub use curve::PlotPoint;
pub use design::{Design, Family, Hypothesis, ParseDesignError, SolveDirection};
pub use params::{Domain, Param, ParameterSet, ParseParamError};
pub use scenario::PowerScenario;
