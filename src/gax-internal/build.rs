// Copyright 2026 The SQL Query Rust SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write;
use std::path::Path;

// Records the compiler version and release channel, used in the
// `User-Agent` header.
fn main() {
    let out_dir = std::env::var_os("OUT_DIR").expect("OUT_DIR not specified");
    let meta = rustc_version::version_meta().expect("Could not retrieve rustc version");
    let channel = match meta.channel {
        rustc_version::Channel::Stable => "stable",
        rustc_version::Channel::Beta => "beta",
        rustc_version::Channel::Nightly => "nightly",
        rustc_version::Channel::Dev => "dev",
    };

    let mut f = std::fs::File::create(Path::new(&out_dir).join("build_env.rs"))
        .expect("Could not create build environment");
    writeln!(
        f,
        "pub(crate) const RUSTC_VERSION: &str = \"{}\";",
        meta.semver
    )
    .expect("Unable to write rust version");
    writeln!(f, "pub(crate) const RUSTC_CHANNEL: &str = \"{channel}\";")
        .expect("Unable to write rust channel");
    f.flush().expect("failed to flush");
}
