/*! Integration tests for Vane.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - value: Tests for the Value and Doc types and the coercion table
 * - path: Tests for Path, PathBuf and PathSpec
 * - resolve: Tests for single-path, multi-path and dispatched resolution
 * - payload: Tests for payload normalization and field mappings
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vane=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

mod path;
mod payload;
mod value;
