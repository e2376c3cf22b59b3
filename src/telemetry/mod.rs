// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Simulated telemetry
//!
//! The power and network pages display metrics from a random walk, not
//! from hardware. The simulator is seeded so a page (or a test) can be
//! deterministic, and each `step` stays inside plausible bounds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Snapshot of the simulated power system.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSample {
    /// Battery charge, percent.
    pub battery_pct: f32,
    /// Main bus voltage, volts.
    pub bus_voltage: f32,
    /// Per-servo current draw, milliamps.
    pub servo_draw_ma: Vec<(&'static str, f32)>,
}

/// Snapshot of the simulated network link.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSample {
    /// WiFi signal strength, dBm.
    pub rssi_dbm: f32,
    /// Pi ↔ Arduino link round trip, milliseconds.
    pub latency_ms: f32,
    /// Packet loss, percent.
    pub packet_loss_pct: f32,
    pub link_up: bool,
}

const SERVOS: &[&str] = &["head", "l-shoulder", "l-elbow", "r-shoulder", "r-elbow"];

/// Random-walk simulator behind both dashboard pages.
#[derive(Debug)]
pub struct TelemetrySim {
    rng: StdRng,
    battery_pct: f32,
    bus_voltage: f32,
    servo_draw_ma: Vec<f32>,
    rssi_dbm: f32,
    latency_ms: f32,
    packet_loss_pct: f32,
}

impl TelemetrySim {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            battery_pct: 87.0,
            bus_voltage: 12.1,
            servo_draw_ma: vec![120.0; SERVOS.len()],
            rssi_dbm: -52.0,
            latency_ms: 14.0,
            packet_loss_pct: 0.2,
        }
    }

    /// Advance the walk one fixed interval.
    pub fn step(&mut self) {
        self.battery_pct = (self.battery_pct + self.rng.random_range(-0.3..0.05))
            .clamp(5.0, 100.0);
        self.bus_voltage =
            (self.bus_voltage + self.rng.random_range(-0.08..0.08)).clamp(10.5, 12.6);
        for draw in &mut self.servo_draw_ma {
            *draw = (*draw + self.rng.random_range(-25.0..25.0)).clamp(40.0, 650.0);
        }
        self.rssi_dbm = (self.rssi_dbm + self.rng.random_range(-2.0..2.0)).clamp(-80.0, -30.0);
        self.latency_ms = (self.latency_ms + self.rng.random_range(-3.0..3.0)).clamp(2.0, 120.0);
        self.packet_loss_pct =
            (self.packet_loss_pct + self.rng.random_range(-0.2..0.2)).clamp(0.0, 8.0);
    }

    pub fn power(&self) -> PowerSample {
        PowerSample {
            battery_pct: self.battery_pct,
            bus_voltage: self.bus_voltage,
            servo_draw_ma: SERVOS
                .iter()
                .zip(&self.servo_draw_ma)
                .map(|(name, draw)| (*name, *draw))
                .collect(),
        }
    }

    pub fn network(&self) -> NetworkSample {
        NetworkSample {
            rssi_dbm: self.rssi_dbm,
            latency_ms: self.latency_ms,
            packet_loss_pct: self.packet_loss_pct,
            link_up: self.rssi_dbm > -78.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_bounds() {
        let mut sim = TelemetrySim::new(7);
        for _ in 0..500 {
            sim.step();
            let power = sim.power();
            assert!((5.0..=100.0).contains(&power.battery_pct));
            assert!((10.5..=12.6).contains(&power.bus_voltage));
            for (_, draw) in &power.servo_draw_ma {
                assert!((40.0..=650.0).contains(draw));
            }
            let net = sim.network();
            assert!((-80.0..=-30.0).contains(&net.rssi_dbm));
            assert!((0.0..=8.0).contains(&net.packet_loss_pct));
        }
    }

    #[test]
    fn test_same_seed_same_walk() {
        let mut a = TelemetrySim::new(42);
        let mut b = TelemetrySim::new(42);
        for _ in 0..20 {
            a.step();
            b.step();
        }
        assert_eq!(a.power(), b.power());
        assert_eq!(a.network(), b.network());
    }

    #[test]
    fn test_servo_names_cover_arms_and_head() {
        let sim = TelemetrySim::new(1);
        let names: Vec<_> = sim.power().servo_draw_ma.iter().map(|(n, _)| *n).collect();
        assert!(names.contains(&"head"));
        assert_eq!(names.len(), 5);
    }
}
