use std::cmp::Ordering;
use std::env;

// Target features that select a SIMD backend in this crate
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    arch: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Lowest number == Highest Priority
    fn priority(&self) -> usize {
        match self.name {
            "sse2" => 0,
            "neon" => 1,
            _ => usize::MAX,
        }
    }

    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse2",
                arch: &["x86", "x86_64"],
                cfg_flag: "sse",
                detected: false,
            },
            CpuFeature {
                // NEON intrinsics are only stable on aarch64
                name: "neon",
                arch: &["aarch64"],
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Reads the features the target is compiled with. Works for
// cross-compilation since cargo describes the target, not the host.
struct TargetDetector {
    arch: String,
    enabled: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(str::to_string)
            .collect();

        Self { arch, enabled }
    }
}

impl CpuFeatureDetector for TargetDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        for feature in features.iter_mut() {
            feature.detected = feature.arch.iter().any(|arch| *arch == self.arch)
                && self.enabled.iter().any(|enabled| enabled == feature.name);
        }
    }

    fn is_applicable(&self) -> bool {
        !self.arch.is_empty()
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn detect_cpu_features(features: &mut [CpuFeature]) {
        let detector = TargetDetector::from_env();

        if detector.is_applicable() {
            detector.detect_features(features);
        }
    }

    fn apply(features: &mut [CpuFeature], force_fallback: bool) {
        features.sort();

        // if no feature is detected, use fallback implementation
        let cfg_flag = features
            .iter()
            .find(|cpu_feature| cpu_feature.detected && !force_fallback)
            .map(|cpu_feature| cpu_feature.cfg_flag)
            .unwrap_or("fallback");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let force_fallback = env::var_os("CARGO_FEATURE_FORCE_FALLBACK").is_some();

    let mut features = CpuFeature::features();

    PlatformDetector::detect_cpu_features(&mut features);

    PlatformDetector::apply(&mut features, force_fallback);
}
