//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Write a minimal manifest declaring the given version string.
pub fn write_manifest(dir: &Path, version: &str) {
    fs::write(
        dir.join("ls.manifest"),
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <assembly xmlns=\"urn:schemas-microsoft-com:asm.v1\" manifestVersion=\"1.0\">\n\
             <assemblyIdentity version=\"{version}\" name=\"ls\" type=\"win32\"/>\n\
             </assembly>\n"
        ),
    )
    .expect("Failed to write manifest fixture");
}

/// Write a resource script with all four version fields at the given build.
pub fn write_rc(dir: &Path, build: u32) {
    fs::write(
        dir.join("ls.rc"),
        format!(
            "VS_VERSION_INFO VERSIONINFO\n\
             FILEVERSION 1,0,{build},1\n\
             PRODUCTVERSION 1,0,{build},1\n\
             BEGIN\n\
             \x20   VALUE \"FileVersion\", \"1.0.{build}.1\"\n\
             \x20   VALUE \"ProductVersion\", \"1.0.{build}.1\"\n\
             END\n"
        ),
    )
    .expect("Failed to write rc fixture");
}

/// Write a config header whose VERSION macro carries the given version and stamp.
pub fn write_config_header(dir: &Path, version: &str, stamp: &str) {
    fs::write(
        dir.join("config.h"),
        format!("#define PROGRAM \"ls\"\n#define VERSION \"{version} {stamp}\"\n"),
    )
    .expect("Failed to write config.h fixture");
}

/// Read one of the fixture files back as a string.
pub fn read_back(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name))
        .unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
}
