//! Command-line token builders for the external remeshing tools
//!
//! Pure functions: options in, ordered token sequence out. Tokens are kept
//! structured (one `OsString` per argument) so paths never pass through a
//! shell and never need quoting.

use std::ffi::OsString;
use std::path::Path;

use crate::options::{InstantOptions, RobustOptions};

/// Tokens for `instantMeshes`:
/// `-o <out> -f <faces> -S <smooth> -k <knn> -c <angle> -r <rosy> -p <posy>
/// [-i] [-D] [-d] <input>`
pub fn instant_args(opts: &InstantOptions, input: &Path, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-o".into(), output.into()];
    args.push("-f".into());
    args.push(opts.face_count.to_string().into());
    args.push("-S".into());
    args.push(opts.smoothing_steps.to_string().into());
    args.push("-k".into());
    args.push(opts.neighbors.to_string().into());
    args.push("-c".into());
    args.push(opts.crease_angle.to_string().into());
    args.push("-r".into());
    args.push(opts.symmetry.rotation().to_string().into());
    args.push("-p".into());
    args.push(opts.symmetry.position().to_string().into());
    if opts.intrinsic {
        args.push("-i".into());
    }
    if opts.dominant {
        args.push("-D".into());
    }
    if opts.deterministic {
        args.push("-d".into());
    }
    args.push(input.into());
    args
}

/// Tokens for `rhdm` (robust quad/hex-dominant meshing):
/// `-b -i <input> -o <out> -d <dim> -s <scale> -S <smooth>`
pub fn robust_args(opts: &RobustOptions, input: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-b".into(),
        "-i".into(),
        input.into(),
        "-o".into(),
        output.into(),
        "-d".into(),
        opts.dimension.as_u32().to_string().into(),
        "-s".into(),
        opts.scale.to_string().into(),
        "-S".into(),
        opts.smoothing_iterations.to_string().into(),
    ]
}
