#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scrim_core::{FADE_OUT, TRANSLATE_OUT};
use scrim_widgets::overlay::{OverlayConfig, OverlayContext, OverlayId, RecordingHost};

#[derive(Debug, Arbitrary)]
enum Op {
    Open { keep_on_accept: bool, nested: bool },
    Close,
    CloseAll,
    Accept(u8),
    Cancel(u8),
    Acknowledge(u8),
    OpenPreview(String),
    ClosePreview,
    AnimationEnd { target: u8, terminal: bool },
    Advance(u16),
}

fuzz_target!(|ops: Vec<Op>| {
    let host = RecordingHost::new();
    let mut overlays = OverlayContext::new(host.clone());
    let mut ids: Vec<OverlayId> = Vec::new();
    let pick = |ids: &[OverlayId], i: u8| ids.get(usize::from(i) % ids.len().max(1)).copied();

    for op in ops {
        match op {
            Op::Open {
                keep_on_accept,
                nested,
            } => {
                let config = OverlayConfig::new("fuzz").on_accept(move |ctx: &mut OverlayContext| {
                    if nested {
                        ctx.open(OverlayConfig::new("nested"));
                    }
                    !keep_on_accept
                });
                ids.push(overlays.open(config));
            }
            Op::Close => {
                overlays.close();
            }
            Op::CloseAll => {
                overlays.close_all();
                assert_eq!(overlays.tracked(), 0);
            }
            Op::Accept(i) => {
                if let Some(id) = pick(&ids, i) {
                    overlays.accept(id);
                }
            }
            Op::Cancel(i) => {
                if let Some(id) = pick(&ids, i) {
                    overlays.cancel(id);
                }
            }
            Op::Acknowledge(i) => {
                if let Some(id) = pick(&ids, i) {
                    overlays.acknowledge(id);
                }
            }
            Op::OpenPreview(image) => {
                if let Some(id) = overlays.open_preview(image, None) {
                    ids.push(id);
                }
            }
            Op::ClosePreview => {
                overlays.close_preview();
            }
            Op::AnimationEnd { target, terminal } => {
                if let Some(id) = pick(&ids, target) {
                    overlays.animation_end(id, if terminal { FADE_OUT } else { TRANSLATE_OUT });
                }
            }
            Op::Advance(ms) => host.drive(&mut overlays, Duration::from_millis(u64::from(ms))),
        }

        for (depth, instance) in overlays.stack().tracked_instances().enumerate() {
            assert_eq!(instance.depth(), depth);
            assert!(instance.phase().is_mounted());
        }
        for id in &ids {
            assert_eq!(overlays.phase(*id).is_detached(), !host.is_mounted(*id));
        }
    }
});
