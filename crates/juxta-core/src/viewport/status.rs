use crate::asset::{ImageAsset, Slot};
use crate::geometry::DisplayMode;
use crate::stage::{Stage, StageState};

use super::state::ViewportState;

fn describe(asset: &ImageAsset, loading: bool) -> String {
    if loading {
        format!("{} loading", asset.file_name)
    } else {
        format!("{} loaded", asset.file_name)
    }
}

/// One-line stage summary shown under the viewport.
pub fn status_line(stage: &Stage, state: &ViewportState) -> String {
    let scale = state.display_mode().short_name();
    match (stage.state(), stage.before(), stage.after()) {
        (StageState::SingleBefore, Some(before), _) => format!(
            "STAGE • BEFORE: {} • scale: {scale}",
            describe(before, stage.is_loading(Slot::Before))
        ),
        (StageState::SingleAfter, _, Some(after)) => format!(
            "STAGE • AFTER: {} • scale: {scale}",
            describe(after, stage.is_loading(Slot::After))
        ),
        (StageState::Paired, Some(before), Some(after)) => {
            let loading = stage.is_loading(Slot::Before) || stage.is_loading(Slot::After);
            let interaction = if state.is_dragging() {
                "Dragging"
            } else {
                "Click or drag to compare"
            };
            let controls = match state.display_mode() {
                DisplayMode::Fullscreen => " • ESC: exit • ↑↓: scroll",
                DisplayMode::OneToOne => " • ↑↓: scroll",
                DisplayMode::Fit => "",
            };
            format!(
                "STAGE • BEFORE: {} • AFTER: {} {} • scale: {scale} • {interaction}{controls}",
                before.file_name,
                after.file_name,
                if loading { "loading" } else { "loaded" },
            )
        }
        _ => "STAGE • EMPTY".to_string(),
    }
}
