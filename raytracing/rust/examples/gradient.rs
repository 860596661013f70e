use std::io::Write;

use anyhow::{Context, Result};
use raytracing::{color, vec3, write_color, Color, Point3, Ray};
use tracing::info;

fn ray_color(r: &Ray) -> Color {
    let unit_direction = r.direction().unit_vector();
    let a = (unit_direction.y() + 1.0) * 0.5;

    (1.0 - a) * color![1.0, 1.0, 1.0] + a * color![0.5, 0.7, 1.0]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let image_width: i32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid image width: {arg}"))?,
        None => 256,
    };
    let aspect_ratio = 16.0 / 9.0;
    let image_height = ((image_width as f64 / aspect_ratio) as i32).max(1);

    let focal_length = 1.0;
    let viewport_height = 2.0;
    let viewport_width = viewport_height * (image_width as f64 / image_height as f64);
    let camera_center = Point3::new();

    let viewport_u = vec3![viewport_width, 0.0, 0.0];
    let viewport_v = vec3![0.0, -viewport_height, 0.0];

    let pixel_delta_u = viewport_u / image_width as f64;
    let pixel_delta_v = viewport_v / image_height as f64;

    let viewport_upper_left = camera_center - vec3![0.0, 0.0, focal_length] - viewport_u / 2.0 - viewport_v / 2.0;
    let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

    let mut stdout = std::io::stdout().lock();

    write!(stdout, "P3\n{image_width} {image_height}\n255\n")?;

    for j in 0..image_height {
        for i in 0..image_width {
            let pixel_center = pixel00_loc + (i as f64 * pixel_delta_u) + (j as f64 * pixel_delta_v);
            let r = Ray::new(camera_center, pixel_center - camera_center);
            write_color(&mut stdout, &ray_color(&r))?;
        }
    }
    stdout.flush()?;

    info!(image_width, image_height, "rendered gradient");
    Ok(())
}
