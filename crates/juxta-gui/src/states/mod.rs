mod textures;
mod ui;

pub use textures::{SlotTexture, SlotTextures};
pub use ui::UIState;
