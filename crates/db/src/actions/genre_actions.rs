use crate::schema::genres::dsl::*;
use crate::DbPoolConnection;
use diesel::prelude::*;
use diesel::result::Error;
use movie_catalog_model::Genre;

pub trait GenreActions {
    /// Retrieve every [Genre], ordered by identifier.
    fn get_all(connection: &DbPoolConnection) -> Result<Vec<Genre>, diesel::result::Error>;
}

impl GenreActions for Genre {
    fn get_all(connection: &DbPoolConnection) -> Result<Vec<Genre>, Error> {
        genres.order(id.asc()).load::<Genre>(connection)
    }
}
