#![doc = r#"
favicrop — square app icons from arbitrary source images.

The crate crops a source image to a centered square (85% of the short side, with the
centre nudged up by 3% of the height), resizes it to 512×512 with a Lanczos filter, and
writes it as an optimized RGBA PNG twice: once to the requested path and once to an
Apple-variant path where `icon.png` becomes `apple-icon.png`. It powers the `favicrop`
CLI and can be embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
favicrop = "0.1"
```

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> favicrop::Result<()> {
    let out = favicrop::process(
        Path::new("artwork/mascot.png"),
        Path::new("app/icon.png"),
    )?;
    // out.secondary == "app/apple-icon.png"
    println!("wrote {} and {}", out.primary.display(), out.secondary.display());
    Ok(())
}
```

Custom parameters
-----------------
```rust,no_run
use std::path::Path;
use favicrop::{FillPolicy, IconParams, PngCompression, ResampleFilter, process_with_params};

fn main() -> favicrop::Result<()> {
    let params = IconParams {
        size: 180,
        fill: FillPolicy::Clamp,
        filter: ResampleFilter::CatmullRom,
        compression: PngCompression::Default,
        ..Default::default()
    };
    process_with_params(Path::new("in.jpg"), Path::new("out/icon.png"), &params)?;
    Ok(())
}
```

In-memory rendering
-------------------
```rust
use favicrop::{IconParams, render_icon};
use image::{DynamicImage, RgbImage};

let src = DynamicImage::ImageRgb8(RgbImage::new(800, 600));
let icon = render_icon(&src, &IconParams::default()).unwrap();
assert_eq!(icon.image.dimensions(), (512, 512));
assert_eq!((icon.cropped_width, icon.cropped_height), (510, 510));
```

Error handling
--------------
All public functions return `favicrop::Result<T>`; match on `favicrop::Error` to tell
decode failures from write failures.

```rust,no_run
use std::path::Path;
use favicrop::{Error, process};

match process(Path::new("missing.png"), Path::new("icon.png")) {
    Ok(_) => {}
    Err(Error::Decode { path, .. }) => eprintln!("cannot read {}", path.display()),
    Err(Error::Write { path, .. }) => eprintln!("cannot write {}", path.display()),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — crop geometry, cropping, resizing and save helpers.
- [`io`] — decoding, PNG writing and secondary path derivation.
- [`types`] — `ResampleFilter`, `FillPolicy`, `PngCompression`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{APPLE_ICON_MARKER, DEFAULT_ICON_SIZE, IconParams, PRIMARY_ICON_MARKER};
pub use crate::core::processing::geometry::{CropRect, PixelBounds, compute_crop_rect};
pub use crate::core::processing::pipeline::ProcessedIcon;
pub use error::{Error, Result};
pub use types::{FillPolicy, PngCompression, ResampleFilter};

pub use io::paths::{apple_icon_path, derive_secondary_path};
pub use io::writers::png::write_icon_png;

pub use api::{IconOutputs, process, process_to_buffer, process_with_params, render_icon};
