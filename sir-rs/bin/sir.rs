use std::{env, fs, path::Path, process};

use log::*;
use serde::{Deserialize, Serialize};
use sir::{
    analytics::SirAnalytic,
    prelude::*,
    utils::{render_marker, render_vbars},
};

const PLOT_HEIGHT: usize = 20;
const PLOT_WIDTH: usize = 100;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    run: RunSettings,
    params: Params,
    verbose: bool,
    plot: bool,
    output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            run: RunSettings::default(),
            params: Params::default(),
            verbose: true,
            plot: true,
            output: None,
        }
    }
}

fn load_config(path: &str) -> Result<Config> {
    if !Path::new(path).exists() {
        info!("{} not found, using the default scenario", path);
        return Ok(Config::default());
    }
    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}

fn run(path: &str) -> Result<()> {
    let cfg = load_config(path)?;
    debug!("{:#?}", cfg);

    let mut sim = cfg.run.build(cfg.params)?;
    let verbose = cfg.verbose;
    sim.run_with(|model| {
        if verbose {
            println!("{}\n", model);
        }
    })?;

    let report = sim.report()?;
    println!("\n{}", report);

    // The closed-form relation only holds for the basic model
    if cfg.run.model() == ModelKind::Basic {
        let analytic = SirAnalytic::from_params(&cfg.params);
        match analytic.max_infected() {
            Ok(max) => println!("Analytic maximum ill at once: {}", max.round()),
            Err(err) => warn!("no analytic peak: {}", err),
        }
        println!(
            "Analytic susceptible floor: {}",
            analytic.susceptible_floor_for_zero_infection()
        );
    }

    if cfg.plot {
        let curve = sim.epicurve();
        let mark = curve
            .times()
            .iter()
            .position(|&t| t == report.fastest_spread_time())
            .map(|i| render_marker(curve.len(), i, PLOT_WIDTH))
            .unwrap_or_default();
        let mut columns = vec![
            ("Susceptible", curve.susceptible()),
            ("Infected", curve.infected()),
            ("Recovered", curve.recovered()),
        ];
        if cfg.run.model().tracks_deaths() {
            columns.push(("Dead", curve.dead()));
        }
        for (name, values) in columns {
            println!("\n{} ({} model)", name, cfg.run.model());
            println!("{}", render_vbars(values, PLOT_HEIGHT, PLOT_WIDTH));
            println!("{} t={}", mark, report.fastest_spread_time());
        }
    }

    if let Some(out) = &cfg.output {
        sim.epicurve().save_csv(out)?;
        info!("epicurve written to {}", out);
    }
    Ok(())
}

pub fn main() {
    use simple_logger::SimpleLogger;
    SimpleLogger::new().init().expect("logger already set");

    let path = env::args().nth(1).unwrap_or_else(|| "conf.toml".to_string());
    if let Err(err) = run(&path) {
        error!("{}", err);
        process::exit(1);
    }
}
