use juxta_core::asset::Slot;

/// GPU copy of one ready slot image.
pub struct SlotTexture {
    pub handle: egui::TextureHandle,
    /// Pixel size of the source bitmap.
    pub size: [usize; 2],
}

impl SlotTexture {
    pub fn id(&self) -> egui::TextureId {
        self.handle.id()
    }
}

/// Textures for both slots. Only replaced when a decode succeeds, so a slot
/// restored after a failed load keeps showing its previous image.
#[derive(Default)]
pub struct SlotTextures {
    before: Option<SlotTexture>,
    after: Option<SlotTexture>,
}

impl SlotTextures {
    pub fn get(&self, slot: Slot) -> Option<&SlotTexture> {
        match slot {
            Slot::Before => self.before.as_ref(),
            Slot::After => self.after.as_ref(),
        }
    }

    pub fn set(&mut self, slot: Slot, texture: SlotTexture) {
        match slot {
            Slot::Before => self.before = Some(texture),
            Slot::After => self.after = Some(texture),
        }
    }

    pub fn clear(&mut self) {
        self.before = None;
        self.after = None;
    }
}
