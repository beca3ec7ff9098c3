//! Built-in example scenes.

use lux_renderer::{
    cuboid, CheckerboardTexture, Camera, Color, Disc, DistantLight, Plane, PointLight, Ray, Scene,
    SceneResult, ShadingProperties, Sphere, Texture, Vec3,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Frames in the focus-pull animation of [`spheres`].
pub const SPHERES_FRAMES: u32 = 120;

/// Aperture and soft-shadow samples used by [`spheres`].
const SPHERES_SAMPLES: usize = 144;

/// Seven colored spheres and a glass pane on a checkerboard floor.
///
/// The camera focus moves from the blue sphere to the teal one over
/// [`SPHERES_FRAMES`] frames and stays there afterwards.
pub fn spheres(frame: u32) -> SceneResult<Scene> {
    let blue_center = Vec3::new(1.0, 9.0, 1.0);
    let teal_center = Vec3::new(0.0, 20.0, 1.0);
    let camera_origin = Vec3::new(0.0, 0.0, 3.0);

    let start_focus = camera_origin.distance(blue_center);
    let end_focus = camera_origin.distance(teal_center);
    let progress = f64::from(frame) / f64::from(SPHERES_FRAMES - 1);
    let focal_distance = (start_focus + (end_focus - start_focus) * progress).min(end_focus);

    let camera = Camera::new(
        Ray::new(camera_origin, Vec3::new(0.0, 1.0, -0.2)),
        Vec3::new(0.0, 0.2, 1.0),
        40.0,
        0.06,
        focal_distance,
        SPHERES_SAMPLES,
        2,
    )?;
    let mut scene = Scene::new(camera, Color::ZERO);

    // Floor
    scene.add_surface(Plane::new(
        Vec3::new(-50.0, -50.0, 0.0),
        Vec3::new(100.0, 0.0, 0.0),
        Vec3::new(0.0, 100.0, 0.0),
        ShadingProperties {
            reflectivity: 0.2,
            ..ShadingProperties::with_texture(CheckerboardTexture::new(
                Color::new(0.9, 0.75, 0.55),
                Color::new(0.2, 0.1, 0.05),
                1.5,
                1.5,
            ))
        },
    )?);

    for (center, color) in [
        (teal_center, Color::new(0.1, 0.7, 1.0)),
        (Vec3::new(-2.0, 15.0, 1.0), Color::new(0.0, 0.4, 0.0)),
        (Vec3::new(2.5, 21.0, 1.0), Color::new(0.8, 0.0, 0.0)),
        (blue_center, Color::new(0.0, 0.3, 0.8)),
        (Vec3::new(-3.0, 10.0, 1.0), Color::new(0.9, 0.7, 0.0)),
        (Vec3::new(4.0, 10.5, 1.0), Color::new(0.75, 0.2, 0.8)),
        (Vec3::new(3.5, 16.0, 1.0), Color::new(0.8, 0.8, 0.8)),
    ] {
        scene.add_surface(glossy_sphere(center, color)?);
    }

    // Glass pane standing on a thin base
    let base_height = 0.05;
    let pane_width = 1.5;
    let pane_depth = 0.1;
    let pane_corner = Vec3::new(-2.5, 8.0, base_height);
    scene.add_surfaces(cuboid(
        pane_corner,
        Vec3::new(pane_width, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 2.0),
        pane_depth,
        ShadingProperties {
            specular_exponent: 100.0,
            specular_intensity: 0.5,
            opacity: 0.1,
            reflectivity: 0.5,
            refractive_index: 1.1,
            ..ShadingProperties::with_texture(Texture::solid(Color::ONE))
        },
    )?);

    let margin = 0.03;
    scene.add_surfaces(cuboid(
        Vec3::new(pane_corner.x - margin, pane_corner.y + margin, 0.0),
        Vec3::new(pane_width + 2.0 * margin, 0.0, 0.0),
        Vec3::new(0.0, 0.0, base_height),
        pane_depth + 2.0 * margin,
        ShadingProperties {
            reflectivity: 0.05,
            ..ShadingProperties::with_texture(Texture::solid(Color::ONE))
        },
    )?);

    scene.add_light(PointLight::new(
        Vec3::new(10.0, 0.0, 30.0),
        Color::new(1.0, 1.0, 0.8),
        30000.0,
        2.0,
        SPHERES_SAMPLES,
    )?);

    Ok(scene)
}

fn glossy_sphere(center: Vec3, color: Color) -> SceneResult<Sphere> {
    Sphere::new(
        center,
        1.0,
        Vec3::X,
        Vec3::Y,
        ShadingProperties {
            specular_exponent: 200.0,
            specular_intensity: 2.0,
            reflectivity: 0.2,
            ..ShadingProperties::with_texture(Texture::solid(color))
        },
    )
}

/// Every surface, texture and light type in the corner of three walls.
pub fn all_elements(_frame: u32) -> SceneResult<Scene> {
    let camera = Camera::new(
        Ray::new(Vec3::new(10.0, 10.0, 5.0), Vec3::new(-10.0, -10.0, -5.0)),
        Vec3::new(-10.0, -10.0, 40.0),
        30.0,
        0.0,
        1.0,
        1,
        2,
    )?;
    let mut scene = Scene::new(camera, Color::new(0.1, 0.8, 1.0));

    let checker = |c1: Color, c2: Color, u_pitch: f64, v_pitch: f64| {
        ShadingProperties::with_texture(CheckerboardTexture::new(c1, c2, u_pitch, v_pitch))
    };
    let polished = |texture: Texture, reflectivity: f64| ShadingProperties {
        specular_exponent: 100.0,
        specular_intensity: 0.5,
        reflectivity,
        ..ShadingProperties::with_texture(texture)
    };

    // Walls
    scene.add_surface(Plane::new(
        Vec3::ZERO,
        Vec3::new(0.0, 4.0, 0.0),
        Vec3::new(0.0, 0.0, 2.0),
        checker(Color::new(0.9, 0.1, 0.1), Color::new(0.8, 0.8, 0.8), 1.0, 0.5),
    )?);
    scene.add_surface(Plane::new(
        Vec3::ZERO,
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 2.0),
        checker(Color::new(0.2, 0.5, 1.0), Color::ZERO, 0.1, 0.1),
    )?);
    scene.add_surface(Plane::new(
        Vec3::ZERO,
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 10.0, 0.0),
        checker(Color::splat(0.9), Color::splat(0.2), 0.3, 0.3),
    )?);

    // Spheres
    scene.add_surface(Sphere::new(
        Vec3::new(1.5, 1.5, 0.75),
        0.5,
        Vec3::Z,
        Vec3::X,
        polished(Texture::solid(Color::splat(0.5)), 0.8),
    )?);
    scene.add_surface(Sphere::new(
        Vec3::new(1.0, 4.4, 1.0),
        0.3,
        Vec3::Y,
        Vec3::X,
        polished(
            CheckerboardTexture::new(Color::ONE, Color::new(0.0, 0.0, 1.0), FRAC_PI_2, FRAC_PI_4)
                .into(),
            0.3,
        ),
    )?);

    // Discs
    scene.add_surface(Disc::new(
        Vec3::new(3.0, 1.0, 0.5),
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.0, 0.5, 0.0),
        checker(Color::new(0.9, 0.8, 0.4), Color::new(0.3, 0.3, 0.0), 0.125, FRAC_PI_2),
    )?);
    scene.add_surface(Disc::new(
        Vec3::new(2.0, 2.0, 0.1),
        Vec3::new(1.5, 0.0, 0.0),
        Vec3::new(0.0, 1.5, 0.0),
        polished(Texture::solid(Color::ZERO), 0.7),
    )?);

    // Gold cube balanced on an edge and a green glass slab
    scene.add_surfaces(cuboid(
        Vec3::new(1.0, 3.0, 0.75),
        Vec3::new(0.0, 0.5, 0.5),
        Vec3::new(0.0, -0.5, 0.5),
        0.5,
        polished(Texture::solid(Color::new(0.9, 0.6, 0.2)), 0.1),
    )?);
    scene.add_surfaces(cuboid(
        Vec3::new(2.5, 4.3, 0.1),
        Vec3::new(-0.8, 0.6, 0.0),
        Vec3::new(0.0, 0.0, 2.0),
        0.05,
        ShadingProperties {
            opacity: 0.1,
            refractive_index: 1.1,
            ..polished(Texture::solid(Color::new(0.0, 1.0, 0.0)), 0.5)
        },
    )?);

    for direction in [
        Vec3::new(-10.0, -10.0, -20.0),
        Vec3::new(-10.0, -10.0, -25.0),
        Vec3::new(-11.0, -9.0, -20.0),
    ] {
        scene.add_light(DistantLight::new(direction, Color::ONE, 0.75, 0.0)?);
    }
    scene.add_light(PointLight::new(
        Vec3::new(5.0, 1.0, 10.0),
        Color::ONE,
        1000.0,
        0.0,
        1,
    )?);

    Ok(scene)
}
