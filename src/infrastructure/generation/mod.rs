//! Generation infrastructure implementations

pub mod emitter_factory;
pub mod go_support;
pub mod handler_emitter;
pub mod module_emitter;
pub mod openapi_emitter;
pub mod template_renderer;
pub mod test_emitter;

pub use emitter_factory::GinEmitterFactory;
pub use handler_emitter::HandlerEmitter;
pub use module_emitter::ModuleEmitter;
pub use openapi_emitter::OpenApiEmitter;
pub use template_renderer::TeraTemplateRenderer;
pub use test_emitter::TestEmitter;
