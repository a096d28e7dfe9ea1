mod growth_distance;
mod sphere_sphere_closest_points;
mod time_of_impact3;
