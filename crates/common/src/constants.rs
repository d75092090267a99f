//! Static name sets shared by the classifier and the exemption rules

use phf::phf_set;

/// Higher-order functions that wrap a component function
pub static WRAPPER_NAMES: phf::Set<&'static str> = phf_set! {
    "memo",
    "forwardRef",
};

/// Namespace the wrappers may be accessed through (`React.memo`)
pub const LIBRARY_ALIAS: &str = "React";

/// Elements whose expression-container children are render callbacks
pub static CHILDREN_RENDER_PROP_COMPONENTS: phf::Set<&'static str> = phf_set! {
    "Field",
    "FastField",
    "Connect",
    "Query",
    "Mutation",
    "Subscription",
};

/// Attribute names that conventionally receive a render callback
pub static RENDER_PROP_NAMES: phf::Set<&'static str> = phf_set! {
    "render",
    "children",
    "renderItem",
    "renderContent",
    "renderOption",
};

/// Elements whose render-prop attributes are exempt
pub static RENDER_PROP_COMPONENTS: phf::Set<&'static str> = phf_set! {
    "Controller",
    "Field",
    "FastField",
    "Connect",
    "Query",
    "Mutation",
};

/// Form controller element and its render attribute (`<Controller render={...} />`)
pub const CONTROLLER_COMPONENT: &str = "Controller";
pub const CONTROLLER_RENDER_PROP: &str = "render";

/// Name the rewritten parameter is given
pub const PROPS_PARAM: &str = "props";
