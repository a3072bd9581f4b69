mod common;

use common::{Call, Recorder};
use nalgebra_glm as glm;
use pulse_wasm::geometry::{self, GROUP_LEN, POSITIONS, VERTEX_COUNT};
use pulse_wasm::{Animator, AnimatorConfig, PhaseState, Routing, Strategy, Toggles};

fn animator() -> Animator<Recorder> {
    Animator::new(Recorder::default(), AnimatorConfig::default())
}

fn combined_animator() -> Animator<Recorder> {
    let config = AnimatorConfig {
        routing: Routing::StartupCombined,
        ..AnimatorConfig::default()
    };
    let mut animator = Animator::new(Recorder::default(), config);
    animator.configure(Toggles::new(true, true)).unwrap();
    animator
}

const OFF: Toggles = Toggles { a: false, b: false };
const ON: Toggles = Toggles { a: true, b: false };

#[test]
fn configure_uploads_template_and_identity() {
    let mut animator = animator();
    animator.configure(OFF).unwrap();

    let r = animator.renderer();
    assert_eq!(r.last_positions().unwrap(), POSITIONS.as_slice());
    assert_eq!(r.last_colors().unwrap(), geometry::colors().as_slice());
    assert_eq!(r.last_transform().unwrap(), &glm::Mat4::identity());
    assert_eq!(r.draws(), 0);
    assert_eq!(*animator.phase(), PhaseState::INITIAL);
}

#[test]
fn every_upload_is_whole_triangles() {
    let mut animator = combined_animator();
    for n in 0..60 {
        let toggles = Toggles::new(n % 3 != 0, n % 2 == 0);
        animator.on_frame(toggles).unwrap();
    }
    for call in &animator.renderer().calls {
        match call {
            Call::Positions(p) => assert_eq!(p.len(), VERTEX_COUNT),
            Call::Colors(c) => assert_eq!(c.len(), VERTEX_COUNT),
            Call::Draw(triangles) => assert_eq!(triangles * 3, VERTEX_COUNT),
            Call::Transform(_) => {}
        }
    }
    assert_eq!(VERTEX_COUNT % 3, 0);
}

#[test]
fn rigid_transform_first_frame() {
    let mut animator = animator();
    animator.configure(ON).unwrap();
    animator.renderer_mut().clear();

    assert_eq!(animator.on_frame(ON).unwrap(), Strategy::RigidTransform);
    assert!((animator.phase().scale_factor - 0.01).abs() < 1e-12);
    assert!((animator.phase().rotation_phase - 0.1).abs() < 1e-12);

    let r = animator.renderer();
    // Template already uploaded by configure.
    assert!(r.last_positions().is_none());
    assert!(r.last_colors().is_none());
    let m = r.last_transform().unwrap();
    assert!((m[(1, 1)] - 0.01).abs() < 1e-4);
    assert_eq!(r.calls.last(), Some(&Call::Draw(12)));
}

#[test]
fn vertex_rewrite_tracks_sine() {
    let mut animator = animator();
    animator.configure(OFF).unwrap();

    for n in 1..=20 {
        assert_eq!(animator.on_frame(OFF).unwrap(), Strategy::VertexRewrite);
        let phase = 0.05 + 0.09 * n as f64;
        assert!((animator.phase().vertex_phase - phase).abs() < 1e-9);

        let r = animator.renderer();
        assert_eq!(r.last_transform().unwrap(), &glm::Mat4::identity());
        for (p, t) in r.last_positions().unwrap().iter().zip(POSITIONS.iter()) {
            assert_eq!(p[0], t[0]);
            assert_eq!(p[2], t[2]);
            assert!((f64::from(p[1]) - f64::from(t[1]) * phase.sin()).abs() < 1e-6);
        }
        assert_eq!(r.last_colors().unwrap(), geometry::colors().as_slice());
    }
}

#[test]
fn combined_strategy_first_frame() {
    let mut animator = combined_animator();
    assert!(animator.startup_combined());

    assert_eq!(animator.on_frame(ON).unwrap(), Strategy::Combined);
    assert!((animator.phase().color_phase - 0.04).abs() < 1e-12);

    let r = animator.renderer();
    let colors = r.last_colors().unwrap();
    for c in &colors[..GROUP_LEN] {
        assert!((f64::from(c[0]) - 0.07451 * 0.04f64.sin()).abs() < 1e-6);
        assert_eq!(&c[1..], &geometry::BLUE[1..]);
    }
    for c in &colors[GROUP_LEN..] {
        assert!((f64::from(c[1]) - 0.29020 * 0.04f64.cos()).abs() < 1e-6);
        assert_eq!(c[0], geometry::RED[0]);
        assert_eq!(&c[2..], &geometry::RED[2..]);
    }
    assert_ne!(r.last_positions().unwrap(), POSITIONS.as_slice());
    assert_eq!(r.last_transform().unwrap(), &glm::Mat4::identity());
}

#[test]
fn configure_resets_phase_state() {
    let mut animator = combined_animator();
    for n in 0..137 {
        let toggles = Toggles::new(n % 2 == 0, true);
        animator.on_frame(toggles).unwrap();
    }
    assert_ne!(*animator.phase(), PhaseState::INITIAL);
    assert_eq!(animator.frames(), 137);

    animator.configure(OFF).unwrap();
    assert_eq!(*animator.phase(), PhaseState::INITIAL);
    assert_eq!(animator.frames(), 0);
    assert!(!animator.startup_combined());
    assert_eq!(animator.renderer().last_positions().unwrap(), POSITIONS.as_slice());
}

#[test]
fn mode_switch_leaves_other_phases_alone() {
    let mut animator = animator();
    animator.configure(OFF).unwrap();

    for _ in 0..10 {
        assert_eq!(animator.on_frame(OFF).unwrap(), Strategy::VertexRewrite);
        assert_eq!(animator.phase().scale_factor, 0.0);
        assert_eq!(animator.phase().rotation_phase, 0.0);
    }
    let vertex_phase = animator.phase().vertex_phase;

    assert_eq!(animator.on_frame(ON).unwrap(), Strategy::RigidTransform);
    assert_eq!(animator.phase().vertex_phase, vertex_phase);
    assert!(animator.phase().scale_factor > 0.0);
}

#[test]
fn toggle_b_has_no_runtime_effect_by_default() {
    let mut animator = animator();
    animator.configure(Toggles::new(true, true)).unwrap();
    // Recorded but not consulted under the default routing.
    assert!(animator.startup_combined());

    for b in [true, false, true] {
        assert_eq!(animator.on_frame(Toggles::new(true, b)).unwrap(), Strategy::RigidTransform);
        assert_eq!(animator.toggles(), Toggles::new(true, b));
    }
    assert_eq!(animator.phase().color_phase, 0.0);
}

#[test]
fn rigid_after_rewrite_restores_template() {
    let mut scattered = combined_animator();
    scattered.on_frame(ON).unwrap();
    scattered.on_frame(OFF).unwrap();

    // Pulse keeps template colors, so it re-uploads them once after scatter.
    let r = scattered.renderer();
    assert_eq!(r.last_colors().unwrap(), geometry::colors().as_slice());

    let mut plain = animator();
    plain.configure(OFF).unwrap();
    plain.on_frame(OFF).unwrap();
    plain.renderer_mut().clear();
    plain.on_frame(ON).unwrap();

    let calls = &plain.renderer().calls;
    assert_eq!(calls[0], Call::Positions(POSITIONS.to_vec()));
    assert!(!calls.iter().any(|c| matches!(c, Call::Colors(_))));

    plain.renderer_mut().clear();
    plain.on_frame(ON).unwrap();
    assert!(matches!(plain.renderer().calls[..], [Call::Transform(_), Call::Draw(12)]));
}

#[test]
fn configure_always_uploads_template() {
    let mut animator = animator();
    animator.configure(OFF).unwrap();
    animator.renderer_mut().clear();

    animator.configure(ON).unwrap();
    let r = animator.renderer();
    assert_eq!(r.uploads(), 2);
    assert_eq!(r.last_positions().unwrap(), POSITIONS.as_slice());
    assert_eq!(r.last_colors().unwrap(), geometry::colors().as_slice());
}

#[test]
fn failed_color_upload_does_not_hide_scattered_positions() {
    let mut animator = combined_animator();
    animator.on_frame(ON).unwrap();
    animator.on_frame(OFF).unwrap();
    animator.configure(Toggles::new(true, true)).unwrap();

    animator.renderer_mut().fail_color_uploads = true;
    assert!(animator.on_frame(ON).is_err());
    assert_ne!(animator.renderer().last_positions().unwrap(), POSITIONS.as_slice());

    animator.renderer_mut().fail_color_uploads = false;
    animator.configure(ON).unwrap();
    assert_eq!(animator.renderer().last_positions().unwrap(), POSITIONS.as_slice());

    assert_eq!(animator.on_frame(ON).unwrap(), Strategy::RigidTransform);
    let r = animator.renderer();
    assert_eq!(r.last_positions().unwrap(), POSITIONS.as_slice());
    assert_eq!(r.last_colors().unwrap(), geometry::colors().as_slice());
}

#[test]
fn failed_position_upload_restores_on_next_rigid_frame() {
    let mut animator = animator();
    animator.configure(OFF).unwrap();

    animator.renderer_mut().fail_position_uploads = true;
    assert!(animator.on_frame(OFF).is_err());

    animator.renderer_mut().fail_position_uploads = false;
    animator.renderer_mut().clear();
    animator.on_frame(ON).unwrap();
    assert_eq!(animator.renderer().calls[0], Call::Positions(POSITIONS.to_vec()));
}
