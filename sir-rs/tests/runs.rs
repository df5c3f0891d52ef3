use assert_approx_eq::assert_approx_eq;
use sir::{analytics::*, prelude::*};

fn run(kind: ModelKind, params: Params) -> Simulation<AnyModel> {
    let mut sim = RunSettings::new(kind).build(params).unwrap();
    sim.run().unwrap();
    sim
}

#[test]
fn every_model_terminates() {
    for &kind in &[ModelKind::Basic, ModelKind::Quarantine, ModelKind::Incubation] {
        let sim = run(kind, Params::default());
        assert!(sim.model().infected() <= 1.0);
        assert!(sim.n_iter() < DEFAULT_MAX_STEPS);
        assert!(!sim.overshoot());
        assert_eq!(sim.epicurve().len(), sim.n_iter() + 1);
    }
}

#[test]
fn population_is_conserved_along_runs() {
    for &kind in &[ModelKind::Basic, ModelKind::Quarantine, ModelKind::Incubation] {
        let sim = run(kind, Params::default());
        for row in sim.epicurve().iter() {
            assert_approx_eq!(row.total(), 50_000.0, 50_000.0 * 1e-9);
        }
    }
}

#[test]
fn basic_peak_matches_analytic_maximum() {
    let mut params = Params::default();
    params.set_time_step(0.1);
    let sim = run(ModelKind::Basic, params);
    let report = sim.report().unwrap();
    let analytic = SirAnalytic::from_params(&params);

    let expect = analytic.max_infected().unwrap();
    assert!((report.max_infected() - expect).abs() < 0.03 * expect);

    // The peak happens when S crosses beta / alpha
    let curve = sim.epicurve();
    let i = curve
        .times()
        .iter()
        .position(|&t| t == report.max_infected_time())
        .unwrap();
    let s = curve.susceptible()[i];
    assert!((s - analytic.peak_susceptible()).abs() < 0.03 * analytic.peak_susceptible());
}

#[test]
fn basic_final_size_matches_analytic_floor() {
    let mut params = Params::default();
    params.set_time_step(0.1);
    let sim = run(ModelKind::Basic, params);
    let floor = SirAnalytic::from_params(&params).susceptible_floor_for_zero_infection() as Real;
    let last = sim.epicurve().tip().unwrap();
    assert!((last.susceptible - floor).abs() < 0.03 * floor);
}

#[test]
fn simulated_trajectory_follows_phase_relation() {
    let mut params = Params::default();
    params.set_time_step(0.05);
    let sim = run(ModelKind::Basic, params);
    let analytic = SirAnalytic::from_params(&params);
    let scale = analytic.max_infected().unwrap();
    for row in sim.epicurve().iter() {
        let expect = analytic.infected_from_susceptible(row.susceptible).unwrap();
        assert!((row.infected - expect).abs() < 0.03 * scale);
    }
}

#[test]
fn quarantine_without_quarantining_is_basic_model() {
    let mut params = Params::default();
    params
        .set_quarantine_percent(0.0)
        .set_attendants(0.0)
        .set_death_rate(0.2);
    let basic = run(ModelKind::Basic, params);
    let quarantine = run(ModelKind::Quarantine, params);

    let (a, b) = (basic.epicurve(), quarantine.epicurve());
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_approx_eq!(x.susceptible, y.susceptible, 1e-6);
        assert_approx_eq!(x.infected, y.infected, 1e-6);
        assert_approx_eq!(0.8 * x.recovered, y.recovered, 1e-6);
        assert_approx_eq!(0.2 * x.recovered, y.dead, 1e-6);
    }
}

#[test]
fn quarantine_reduces_spread() {
    let basic = run(ModelKind::Basic, Params::default()).report().unwrap();
    let quarantine = run(ModelKind::Quarantine, Params::default()).report().unwrap();
    assert!(quarantine.total_infected() < basic.total_infected());
}

#[test]
fn masking_reduces_spread() {
    let mut settings = RunSettings::new(ModelKind::Incubation);
    let plain = sweep(settings, &[Params::default()]).remove(0).unwrap();
    settings.set_masking(Masking::On);
    let masked = sweep(settings, &[Params::default()]).remove(0).unwrap();
    assert!(masked.total_infected() < plain.total_infected());
    assert!(masked.max_infected() < plain.max_infected());
}

#[test]
fn report_is_consistent_with_curve() {
    let sim = run(ModelKind::Incubation, Params::default());
    let report = sim.report().unwrap();
    let curve = sim.epicurve();
    let last = curve.tip().unwrap();

    assert_eq!(report.duration(), last.time);
    assert_eq!(report.steps(), sim.n_iter());
    assert_approx_eq!(report.total_infected(), 50_000.0 - last.susceptible, 1e-6);
    assert_eq!(
        report.fastest_spread_time(),
        fastest_spread_time(curve.times(), curve.susceptible()).unwrap()
    );
    assert!(report.max_infected() >= last.infected);
    assert!(report.fastest_spread_time() <= report.duration());
}
