pub mod aggregate;
pub mod category;
pub mod contract;
pub mod emissions;
pub mod error;
pub mod estimate;
pub mod fallback;
pub mod image;
pub mod infer;
pub mod normalize;
pub mod prompts;
pub mod quantity;
pub mod resolve;
pub mod types;

pub use error::{validate_dish_name, InputError, MAX_BATCH_DISHES, MAX_DISH_NAME_CHARS};
pub use estimate::{
    estimate_batch, estimate_dish, estimate_image, TEXT_METHODOLOGY, VISION_METHODOLOGY,
};
pub use image::{validate_image, ImagePayload, MAX_IMAGE_BYTES};
pub use infer::{
    create_provider_from_env, ClaudeProvider, FakeProvider, InferConfig, InferError,
    InferenceProvider, DEFAULT_MODEL,
};
pub use types::{
    BatchItemResult, DishEstimate, InferenceResponse, RawIngredient, ResolvedIngredient,
    TableStats, VisionInferenceResponse,
};
