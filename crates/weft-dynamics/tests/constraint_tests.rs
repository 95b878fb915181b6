//! Integration tests for the XPBD constraint family.

use weft_dynamics::{
    dihedral_angle, BendingConstraint, Constraint, ContactConstraint, DistanceConstraint,
    Particle, PinConstraint,
};
use weft_types::Vec3;

const DT: f64 = 1.0 / 600.0;

fn two_particles(separation: f64) -> Vec<Particle> {
    vec![
        Particle::new(Vec3::ZERO),
        Particle::new(Vec3::new(separation, 0.0, 0.0)),
    ]
}

// ─── Distance ─────────────────────────────────────────────────

#[test]
fn distance_pulls_stretched_pair_together() {
    let mut particles = two_particles(1.5);
    let mut c = DistanceConstraint::new(0, 1, 1.0, 0.0);

    for _ in 0..50 {
        c.solve(&mut particles, DT);
    }

    let dist = (particles[0].position() - particles[1].position()).length();
    assert!(
        (dist - 1.0).abs() < 1e-6,
        "pair should settle at rest length, got {dist}"
    );
}

#[test]
fn distance_pushes_compressed_pair_apart() {
    let mut particles = two_particles(0.5);
    let mut c = DistanceConstraint::new(0, 1, 1.0, 0.0);

    for _ in 0..50 {
        c.solve(&mut particles, DT);
    }

    let dist = (particles[0].position() - particles[1].position()).length();
    assert!((dist - 1.0).abs() < 1e-6, "got {dist}");
}

#[test]
fn distance_correction_is_symmetric_for_equal_masses() {
    let mut particles = two_particles(2.0);
    let mut c = DistanceConstraint::new(0, 1, 1.0, 0.0);
    c.solve(&mut particles, DT);

    let moved_a = particles[0].position().x;
    let moved_b = 2.0 - particles[1].position().x;
    assert!(
        (moved_a - moved_b).abs() < 1e-12,
        "equal inverse masses share the correction evenly"
    );
}

#[test]
fn distance_respects_pinned_endpoint() {
    let mut particles = two_particles(2.0);
    particles[0].set_inverse_mass(0.0);
    let mut c = DistanceConstraint::new(0, 1, 1.0, 0.0);

    for _ in 0..50 {
        c.solve(&mut particles, DT);
    }

    assert_eq!(particles[0].position(), Vec3::ZERO, "pinned end fixed");
    let dist = (particles[0].position() - particles[1].position()).length();
    assert!((dist - 1.0).abs() < 1e-6);
}

#[test]
fn distance_skips_coincident_pair() {
    let mut particles = two_particles(0.0);
    let mut c = DistanceConstraint::new(0, 1, 1.0, 0.0);
    c.solve(&mut particles, DT);
    assert_eq!(particles[0].position(), Vec3::ZERO, "degenerate pair untouched");
}

#[test]
fn distance_compliance_softens_response() {
    let stiff = {
        let mut particles = two_particles(2.0);
        let mut c = DistanceConstraint::new(0, 1, 1.0, 0.0);
        c.solve(&mut particles, DT);
        (particles[0].position() - particles[1].position()).length()
    };
    let soft = {
        let mut particles = two_particles(2.0);
        let mut c = DistanceConstraint::new(0, 1, 1.0, 1.0e-3);
        c.solve(&mut particles, DT);
        (particles[0].position() - particles[1].position()).length()
    };
    assert!(
        soft > stiff,
        "a compliant constraint corrects less per iteration: soft={soft}, stiff={stiff}"
    );
}

#[test]
fn distance_lambda_reset_restores_first_iteration_behavior() {
    // Two identical setups; one resets λ between solves, one does not.
    let mut a_particles = two_particles(2.0);
    let mut a = DistanceConstraint::new(0, 1, 1.0, 1.0e-3);
    a.solve(&mut a_particles, DT);
    let first = (a_particles[0].position() - a_particles[1].position()).length();

    a.reset_lambda();
    let mut again = two_particles(2.0);
    a.solve(&mut again, DT);
    let second = (again[0].position() - again[1].position()).length();

    assert!(
        (first - second).abs() < 1e-12,
        "after reset the projection repeats exactly"
    );
}

// ─── Pin ──────────────────────────────────────────────────────

#[test]
fn hard_pin_restores_target_exactly() {
    let mut particles = vec![Particle::new(Vec3::new(0.3, -0.2, 0.1))];
    let mut pin = PinConstraint::new(0, Vec3::ZERO, 0.0);
    pin.solve(&mut particles, DT);
    assert!(
        particles[0].position().length() < 1e-12,
        "zero-compliance pin snaps to target in one projection"
    );
}

#[test]
fn soft_pin_approaches_target() {
    let mut particles = vec![Particle::new(Vec3::new(1.0, 0.0, 0.0))];
    let mut pin = PinConstraint::new(0, Vec3::ZERO, 1.0e-2);
    let start = particles[0].position().length();
    for _ in 0..20 {
        pin.solve(&mut particles, DT);
    }
    let end = particles[0].position().length();
    assert!(end < start, "soft pin still attracts: {end} < {start}");
    assert!(end > 0.0, "but does not snap instantly");
}

#[test]
fn pin_skips_particle_at_target() {
    let mut particles = vec![Particle::new(Vec3::ZERO)];
    let mut pin = PinConstraint::new(0, Vec3::ZERO, 0.0);
    pin.solve(&mut particles, DT);
    assert_eq!(particles[0].position(), Vec3::ZERO);
}

// ─── Contact ──────────────────────────────────────────────────

#[test]
fn contact_separates_close_pair() {
    let mut particles = two_particles(0.02);
    let mut contact = ContactConstraint::new(0, 1, 0.05, 0.0);
    for _ in 0..10 {
        contact.solve(&mut particles, DT);
    }
    let dist = (particles[0].position() - particles[1].position()).length();
    assert!(
        (dist - 0.05).abs() < 1e-6,
        "pair pushed to thickness, got {dist}"
    );
}

#[test]
fn contact_inactive_when_separated() {
    let mut particles = two_particles(0.1);
    let mut contact = ContactConstraint::new(0, 1, 0.05, 0.0);
    contact.solve(&mut particles, DT);
    assert_eq!(particles[0].position(), Vec3::ZERO, "no correction beyond thickness");
    assert_eq!(particles[1].position(), Vec3::new(0.1, 0.0, 0.0));
}

// ─── Bending ──────────────────────────────────────────────────

/// A hinge along X with wings at ±z rotated by `fold` around the hinge.
fn hinge(fold: f64) -> Vec<Particle> {
    vec![
        Particle::new(Vec3::new(0.0, 0.0, 0.0)),
        Particle::new(Vec3::new(1.0, 0.0, 0.0)),
        Particle::new(Vec3::new(0.5, 0.0, 1.0)),
        Particle::new(Vec3::new(0.5, fold.sin(), -fold.cos())),
    ]
}

#[test]
fn dihedral_angle_flat_hinge() {
    let particles = hinge(0.0);
    let angle = dihedral_angle(
        particles[0].position(),
        particles[1].position(),
        particles[2].position(),
        particles[3].position(),
    )
    .expect("flat hinge is not degenerate");
    assert!(
        (angle.abs() - std::f64::consts::PI).abs() < 1e-9,
        "opposite-side wings give a straight dihedral, got {angle}"
    );
}

#[test]
fn dihedral_angle_degenerate_edge_is_none() {
    let p = Vec3::new(0.5, 0.5, 0.0);
    assert!(dihedral_angle(p, p, Vec3::X, Vec3::Y).is_none());
}

#[test]
fn dihedral_angle_collinear_wing_is_none() {
    // Wing c sits on the hinge line: zero-area triangle.
    assert!(dihedral_angle(
        Vec3::ZERO,
        Vec3::X,
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.5, 1.0, 0.0)
    )
    .is_none());
}

#[test]
fn bending_holds_rest_configuration() {
    let mut particles = hinge(0.0);
    let rest = dihedral_angle(
        particles[0].position(),
        particles[1].position(),
        particles[2].position(),
        particles[3].position(),
    )
    .unwrap();
    let before: Vec<Vec3> = particles.iter().map(|p| p.position()).collect();

    let mut c = BendingConstraint::new(0, 1, 2, 3, rest, 1.0e-4);
    for _ in 0..10 {
        c.solve(&mut particles, DT);
    }

    for (i, p) in particles.iter().enumerate() {
        assert!(
            (p.position() - before[i]).length() < 1e-9,
            "particle {i} moved from rest"
        );
    }
}

#[test]
fn bending_drives_toward_rest_angle() {
    // Start folded, rest flat: the angle error must shrink.
    let mut particles = hinge(-0.6);
    let flat = hinge(0.0);
    let rest = dihedral_angle(
        flat[0].position(),
        flat[1].position(),
        flat[2].position(),
        flat[3].position(),
    )
    .unwrap();

    let angle_error = |particles: &[Particle]| {
        let angle = dihedral_angle(
            particles[0].position(),
            particles[1].position(),
            particles[2].position(),
            particles[3].position(),
        )
        .unwrap();
        (angle - rest).abs()
    };

    let initial = angle_error(&particles);
    let mut c = BendingConstraint::new(0, 1, 2, 3, rest, 0.0);
    for _ in 0..100 {
        c.solve(&mut particles, DT);
    }
    let final_error = angle_error(&particles);

    assert!(
        final_error < initial * 0.5,
        "angle error should shrink: {initial} -> {final_error}"
    );
}

#[test]
fn bending_skips_degenerate_hinge() {
    let mut particles = vec![
        Particle::new(Vec3::ZERO),
        Particle::new(Vec3::ZERO), // collapsed hinge
        Particle::new(Vec3::new(0.5, 0.0, 1.0)),
        Particle::new(Vec3::new(0.5, 0.0, -1.0)),
    ];
    let mut c = BendingConstraint::new(0, 1, 2, 3, 0.0, 0.0);
    c.solve(&mut particles, DT);
    assert_eq!(particles[2].position(), Vec3::new(0.5, 0.0, 1.0), "no-op on degenerate hinge");
}
