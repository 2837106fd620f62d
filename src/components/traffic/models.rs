use serde::{Deserialize, Serialize};

/// Congestion level reported for a road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Congestion {
    Smooth,
    Slow,
    Congested,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Congestion {
    /// Higher is worse; used to put the slowest roads first
    pub fn severity(self) -> u8 {
        match self {
            Congestion::Congested => 3,
            Congestion::Slow => 2,
            Congestion::Smooth => 1,
            Congestion::Unknown => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RoadStatus {
    pub road_name: String,
    pub speed_kmh: f64,
    pub congestion: Congestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParkingLot {
    pub name: String,
    pub capacity: u32,
    pub available: u32,
}

impl ParkingLot {
    /// Share of free spaces in `0.0..=1.0`
    pub fn availability(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.available.min(self.capacity) as f64) / (self.capacity as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Accident {
    pub location: String,
    pub description: String,
    pub reported_at: String,
}

/// Traffic, parking and accident data shown in the traffic card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrafficSnapshot {
    pub roads: Vec<RoadStatus>,
    pub parking: Vec<ParkingLot>,
    pub accidents: Vec<Accident>,
}

impl TrafficSnapshot {
    /// A snapshot is worth rendering once any of its lists has data
    pub fn is_present(&self) -> bool {
        !(self.roads.is_empty() && self.parking.is_empty() && self.accidents.is_empty())
    }

    /// Roads ordered worst congestion first, then by speed
    pub fn roads_by_severity(&self) -> Vec<&RoadStatus> {
        let mut roads: Vec<&RoadStatus> = self.roads.iter().collect();
        roads.sort_by(|a, b| {
            b.congestion
                .severity()
                .cmp(&a.congestion.severity())
                .then(a.speed_kmh.total_cmp(&b.speed_kmh))
        });
        roads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_congestion_value() {
        let road: RoadStatus =
            serde_json::from_str(r#"{"road_name":"강변북로","speed_kmh":12.5,"congestion":"jammed"}"#)
                .unwrap();
        assert_eq!(road.congestion, Congestion::Unknown);
    }

    #[test]
    fn test_roads_by_severity() {
        let snapshot = TrafficSnapshot {
            roads: vec![
                RoadStatus { road_name: "A".into(), speed_kmh: 60.0, congestion: Congestion::Smooth },
                RoadStatus { road_name: "B".into(), speed_kmh: 15.0, congestion: Congestion::Congested },
                RoadStatus { road_name: "C".into(), speed_kmh: 8.0, congestion: Congestion::Congested },
                RoadStatus { road_name: "D".into(), speed_kmh: 30.0, congestion: Congestion::Slow },
            ],
            ..Default::default()
        };
        let names: Vec<&str> = snapshot
            .roads_by_severity()
            .iter()
            .map(|r| r.road_name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "B", "D", "A"]);
    }

    #[test]
    fn test_presence_and_availability() {
        assert!(!TrafficSnapshot::default().is_present());

        let lot = ParkingLot { name: "시청".into(), capacity: 200, available: 50 };
        assert!((lot.availability() - 0.25).abs() < f64::EPSILON);
        assert_eq!(ParkingLot::default().availability(), 0.0);

        let snapshot = TrafficSnapshot { parking: vec![lot], ..Default::default() };
        assert!(snapshot.is_present());
    }
}
