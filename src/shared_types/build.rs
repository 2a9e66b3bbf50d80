use anyhow::Result;
use crux_core::typegen::TypeGen;
use esp_control_ui_core::{
    events::{AssistantEvent, ControlEvent, MonitorEvent, UiEvent},
    types::{ChatRole, LedCommand, LedStatus},
    App,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<MonitorEvent>()?;
    gen.register_type::<ControlEvent>()?;
    gen.register_type::<AssistantEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<LedStatus>()?;
    gen.register_type::<LedCommand>()?;
    gen.register_type::<ChatRole>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
