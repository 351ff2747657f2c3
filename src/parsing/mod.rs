pub mod builder;

pub use builder::{
    build_import_model, build_reexport_model, has_named_export_specifiers,
    has_named_import_specifiers,
};
