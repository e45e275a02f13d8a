//! Probes a host version tag and walks the compatibility surface with
//! logging enabled.
//!
//! Run with: `cargo run --example host_probe -- v1_9_R2`

use shop_compat::{decode_item, encode_item, is_uuid, HostContext, ItemStack};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let tag = std::env::args().nth(1).unwrap_or_else(|| "v1_9_R2".into());
    let ctx = match HostContext::from_tag(&tag) {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "host {} -> hand model {:?}, storage model {:?}",
        ctx.version(),
        ctx.capabilities().hand_model,
        ctx.capabilities().storage_model
    );

    let ware = ItemStack::new("emerald", 16).with_display_name("Shop Currency");
    match encode_item(&ware) {
        Ok(token) => {
            tracing::info!("item token: {}", token);
            let restored: Option<ItemStack> = decode_item(&token);
            tracing::info!("token decodes back: {}", restored.is_some());
        }
        Err(err) => tracing::error!("encode failed: {}", err),
    }

    // A malformed token decodes softly to None and logs the reason.
    let _: Option<ItemStack> = decode_item("not-valid-base64!!");

    tracing::info!(
        "tag {} looks like a UUID: {}",
        tag,
        is_uuid(&tag)
    );
}
