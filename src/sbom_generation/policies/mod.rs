mod anonymous_component_policy;

pub use anonymous_component_policy::AnonymousComponentPolicy;
