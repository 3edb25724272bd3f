use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use pinchview_core::{GestureEvent, Rect2D};
use pinchview_surface::{
    GestureController, RenderSurface, SharedTransform, SurfaceSettings, TransformSnapshot,
};

// ── Replay script ────────────────────────────────────────────────────

/// A recorded gesture session.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    /// Settings embedded in the script; a `--settings` file takes precedence.
    #[serde(default)]
    pub settings: Option<SurfaceSettings>,
    #[serde(default)]
    pub surface: SurfaceSize,
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Gesture(GestureEvent),
    Lifecycle { lifecycle: LifecycleStep },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStep {
    Pause,
    Resume,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?;
        Self::from_json(&json).map_err(|e| format!("Invalid script {}: {}", path.display(), e))
    }
}

// ── Threaded surface ─────────────────────────────────────────────────

enum SurfaceMessage {
    Render,
    Pause,
    Resume,
    Shutdown,
}

/// What the render thread did over its lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RenderStats {
    pub frames_drawn: u64,
    pub skipped_redundant: u64,
    pub dropped_while_paused: u64,
    pub last_revision: u64,
}

/// Surface whose draws happen on a dedicated render thread. Requests are
/// queued on a channel and never block the control thread.
pub struct ThreadedSurface {
    tx: Sender<SurfaceMessage>,
    handle: Option<JoinHandle<RenderStats>>,
}

impl ThreadedSurface {
    pub fn spawn(shared: SharedTransform, size: SurfaceSize) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || render_loop(rx, shared, size));
        Self {
            tx,
            handle: Some(handle),
        }
    }

    fn send(&self, message: SurfaceMessage) {
        if self.tx.send(message).is_err() {
            log::warn!("Render thread is gone; message dropped");
        }
    }

    /// Stop the render thread and collect its statistics.
    pub fn shutdown(mut self) -> Result<RenderStats, String> {
        self.send(SurfaceMessage::Shutdown);
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| "Render thread panicked".to_string()),
            None => Ok(RenderStats::default()),
        }
    }
}

impl RenderSurface for ThreadedSurface {
    fn request_render(&mut self) {
        self.send(SurfaceMessage::Render);
    }

    fn on_pause(&mut self) {
        self.send(SurfaceMessage::Pause);
    }

    fn on_resume(&mut self) {
        self.send(SurfaceMessage::Resume);
    }
}

fn render_loop(
    rx: Receiver<SurfaceMessage>,
    shared: SharedTransform,
    size: SurfaceSize,
) -> RenderStats {
    let mut stats = RenderStats::default();
    let mut paused = false;

    while let Ok(message) = rx.recv() {
        match message {
            SurfaceMessage::Render if paused => stats.dropped_while_paused += 1,
            SurfaceMessage::Render => {
                let snap = shared.snapshot();
                if stats.frames_drawn > 0 && snap.revision == stats.last_revision {
                    stats.skipped_redundant += 1;
                    continue;
                }
                let visible = snap.transform.visible_content_bounds(size.width, size.height);
                let center = visible.center();
                log::info!(
                    "Frame {}: rev {}, scale {:.4}, visible content {:.1}x{:.1} centered at ({:.1}, {:.1})",
                    stats.frames_drawn + 1,
                    snap.revision,
                    snap.transform.scale,
                    visible.width(),
                    visible.height(),
                    center.x,
                    center.y
                );
                stats.frames_drawn += 1;
                stats.last_revision = snap.revision;
            }
            SurfaceMessage::Pause => paused = true,
            SurfaceMessage::Resume => paused = false,
            SurfaceMessage::Shutdown => break,
        }
    }
    stats
}

// ── Replay ───────────────────────────────────────────────────────────

/// Outcome of a replay run.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub snapshot: TransformSnapshot,
    pub visible_bounds: Rect2D,
    pub applied: usize,
    pub rejected: usize,
    pub render: RenderStats,
}

/// Drive a controller through every step of `script`, the way a host's input
/// callbacks would, and wait for the render thread to drain.
pub fn replay(script: &ReplayScript, settings: SurfaceSettings) -> Result<ReplayReport, String> {
    let shared = SharedTransform::new();
    let surface = ThreadedSurface::spawn(shared.clone(), script.surface);
    let mut controller =
        GestureController::with_shared_transform(surface, settings, shared.clone());

    let mut applied = 0;
    let mut rejected = 0;
    for step in &script.steps {
        match step {
            ScriptStep::Gesture(event) => match controller.handle(*event) {
                Ok(_) => applied += 1,
                Err(_) => rejected += 1,
            },
            ScriptStep::Lifecycle { lifecycle } => match lifecycle {
                LifecycleStep::Pause => controller.on_pause(),
                LifecycleStep::Resume => controller.on_resume(),
            },
        }
    }

    let render = controller.into_surface().shutdown()?;
    let snapshot = shared.snapshot();
    Ok(ReplayReport {
        snapshot,
        visible_bounds: snapshot
            .transform
            .visible_content_bounds(script.surface.width, script.surface.height),
        applied,
        rejected,
        render,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinchview_core::{Point2D, MAX_ZOOM};

    const SCRIPT: &str = r#"{
        "surface": { "width": 800.0, "height": 600.0 },
        "steps": [
            { "kind": "pinch", "factor": 2.0, "focal": { "x": 100.0, "y": 100.0 } },
            { "lifecycle": "pause" },
            { "kind": "pan", "delta_x": 10.0, "delta_y": -5.0 },
            { "kind": "pinch", "factor": -1.0, "focal": { "x": 0.0, "y": 0.0 } },
            { "lifecycle": "resume" },
            { "kind": "tap", "point": { "x": 5.0, "y": 5.0 } }
        ]
    }"#;

    #[test]
    fn test_parse_script() {
        let script = ReplayScript::from_json(SCRIPT).unwrap();
        assert!(script.settings.is_none());
        assert_eq!(script.surface.width, 800.0);
        assert_eq!(script.steps.len(), 6);
        assert!(matches!(
            script.steps[1],
            ScriptStep::Lifecycle {
                lifecycle: LifecycleStep::Pause
            }
        ));
        assert!(matches!(
            script.steps[2],
            ScriptStep::Gesture(GestureEvent::Pan { .. })
        ));
    }

    #[test]
    fn test_replay_counts_and_final_transform() {
        let script = ReplayScript::from_json(SCRIPT).unwrap();
        let report = replay(&script, SurfaceSettings::default()).unwrap();
        assert_eq!(report.applied, 3);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.snapshot.revision, 3);
        assert_eq!(report.snapshot.transform.scale, 2.0);
        assert_eq!(report.snapshot.transform.offset, Point2D::new(-110.0, -95.0));
        // 800x600 screen at scale 2 shows a 400x300 slice of content
        assert_eq!(report.visible_bounds.width(), 400.0);
        assert_eq!(report.visible_bounds.height(), 300.0);
        assert_eq!(report.visible_bounds.min, Point2D::new(55.0, 47.5));
        // the first render and at least the post-resume render reach the thread
        assert!(report.render.frames_drawn >= 1);
        assert!(report.render.frames_drawn <= 3);
    }

    #[test]
    fn test_replay_clamps_zoom() {
        let script = ReplayScript::from_json(
            r#"{ "steps": [
                { "kind": "pinch", "factor": 2.0, "focal": { "x": 100.0, "y": 100.0 } },
                { "kind": "pinch", "factor": 2000.0, "focal": { "x": 100.0, "y": 100.0 } }
            ] }"#,
        )
        .unwrap();
        let report = replay(&script, SurfaceSettings::default()).unwrap();
        assert_eq!(report.snapshot.transform.scale, MAX_ZOOM);
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn test_report_serializes() {
        let script = ReplayScript::from_json(r#"{ "steps": [] }"#).unwrap();
        let report = replay(&script, SurfaceSettings::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["snapshot"]["revision"], 0);
        assert_eq!(json["render"]["frames_drawn"], 0);
    }
}
