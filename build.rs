use std::collections::HashSet;
use std::env;

// Backends this crate can be compiled against, highest priority first
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum Backend {
    Avx,
    Fallback,
}

impl Backend {
    fn cfg_flag(self) -> &'static str {
        match self {
            Backend::Avx => "avx",
            Backend::Fallback => "fallback",
        }
    }
}

// Target features the `avx` backend needs, as rustc names them in
// CARGO_CFG_TARGET_FEATURE. sse4.1 covers the 128-bit rounding ops, avx the
// 256-bit registers and fma the fused kernels.
//
// Only features enabled for the compilation target count. A host CPU that
// supports them is not enough: without `-C target-feature` or
// `-C target-cpu` the intrinsics cannot be inlined into callers.
const REQUIRED_FEATURES: &[&str] = &["sse4.1", "avx", "fma"];

struct TargetFeatures {
    enabled: HashSet<String>,
}

impl TargetFeatures {
    fn from_env() -> Self {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(str::to_owned)
            .collect();

        Self { enabled }
    }

    fn missing(&self) -> Vec<&'static str> {
        REQUIRED_FEATURES
            .iter()
            .copied()
            .filter(|feature| !self.enabled.contains(*feature))
            .collect()
    }
}

fn select(features: &TargetFeatures, is_x86: bool, forced_portable: bool) -> Backend {
    if forced_portable || !is_x86 {
        return Backend::Fallback;
    }

    let missing = features.missing();
    if missing.is_empty() {
        Backend::Avx
    } else {
        println!(
            "cargo:warning=lanewise: target lacks {}, using the portable backend \
             (build with RUSTFLAGS=\"-C target-cpu=native\" to enable avx)",
            missing.join(", ")
        );
        Backend::Fallback
    }
}

fn apply(backend: Backend) {
    let cfg_flag = backend.cfg_flag();

    println!("applying: {cfg_flag}");

    println!("cargo:rustc-cfg={cfg_flag}");

    println!("cargo::rustc-check-cfg=cfg(avx)");
    println!("cargo::rustc-check-cfg=cfg(fallback)");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let is_x86 = target_arch == "x86" || target_arch == "x86_64";

    // `--features portable` pins the scalar backend whatever the target offers
    let forced_portable = env::var_os("CARGO_FEATURE_PORTABLE").is_some();

    let backend = select(&TargetFeatures::from_env(), is_x86, forced_portable);

    apply(backend);
}
