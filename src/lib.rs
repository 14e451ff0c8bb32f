//! Decentralized network coordinates: a synchronous, in-memory
//! implementation of Vivaldi (Dabek et al., 2004), the adjustment term from
//! Ledlie et al. ("Network Coordinates in the Wild", 2007), and the
//! hybrid Euclidean-plus-offset embedding of Lee et al. ("On the
//! Suitability of Euclidean Embedding for Latency-Based Space
//! Partitioning", 2010), alongside a streaming median pre-filter (Ekstrom,
//! "Better Than Average", 2000).
//!
//! Each participating peer maintains a coordinate such that the Euclidean
//! distance (plus a per-node height term) between two peers' coordinates
//! approximates the network round-trip time between them. This crate does
//! not define a wire format, transport, peer discovery, or persistence —
//! it is a pure estimator. Callers obtain RTT samples however they like
//! (pings, RPC timing, ...) and feed them in:
//!
//! ```
//! use vivaldi::{filter::LatencyFilter, node::Node};
//!
//! // One 8-dimensional node per peer, with a 20-sample adjustment window,
//! // and a shared median pre-filter smoothing the last 3 raw samples per
//! // remote peer before they reach the coordinate update.
//! let mut local = Node::<8, 20>::new();
//! let mut remote = Node::<8, 20>::new();
//! let mut filter = LatencyFilter::<&str, f64, 3>::new();
//!
//! let raw_rtt_seconds = 0.045;
//! let smoothed = filter.push("remote-peer", raw_rtt_seconds);
//! local.update(&remote, smoothed);
//!
//! let estimated_rtt = local.distance(&remote);
//! assert!(estimated_rtt >= 0.0);
//! ```
//!
//! # Modules
//!
//! - [`coordinate`] — the spring-relaxation update rule and gravity.
//! - [`node`] — wraps a coordinate with the Lee et al. adjustment.
//! - [`filter`] — the per-peer streaming median pre-filter.
//! - [`config`] — tuning constants for [`coordinate::Coordinate`].

pub mod config;
pub mod coordinate;
pub mod filter;
pub mod node;
mod vector;

pub use config::CoordinateConfig;
pub use coordinate::Coordinate;
pub use filter::LatencyFilter;
pub use node::Node;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{Coordinate, Node};

    #[test]
    fn coordinate_roundtrips_through_json() {
        let mut c = Coordinate::<3>::new();
        c.update(&Coordinate::<3>::new(), 0.05);

        let encoded = serde_json::to_string(&c).unwrap();
        let decoded: Coordinate<3> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.vector(), c.vector());
        assert_eq!(decoded.height(), c.height());
        assert_eq!(decoded.error(), c.error());
    }

    #[test]
    fn node_roundtrips_through_json() {
        let mut a = Node::<3, 4>::new();
        let b = Node::<3, 4>::new();
        a.update(&b, 0.05);

        let encoded = serde_json::to_string(&a).unwrap();
        let decoded: Node<3, 4> = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.coordinate().vector(), a.coordinate().vector());
        assert_eq!(decoded.adjustment(), a.adjustment());
    }
}
