//! Sliding-window admission core
//!
//! Three pieces cooperate per request: the resolver loads the rule set for
//! an application identifier, the accountant runs one atomic window update
//! per rule, and the decision folds the outcomes into a single admit/reject
//! result carrying the strictest rule's quota numbers.

mod decision;
mod resolver;
mod types;
mod window;


pub use decision::AdmissionDecision;
pub use resolver::RuleResolver;
pub use types::WindowSnapshot;
pub use window::WindowAccountant;
