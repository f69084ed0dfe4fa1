use crate::genre_match::{contains_pattern, GenreMatch};
use crate::schema::{movies, movies_genres};
use crate::{DbPoolConnection, ROW_LIMIT};
use diesel::dsl::sql;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::QueryFragment;
use diesel::query_dsl::LoadQuery;
use diesel::result::Error;
use diesel::sql_types::Text;
use movie_catalog_model::Movie;
use tracing::debug;

pub trait MovieActions {
    /// Retrieve up to [ROW_LIMIT] movies ordered by release date, earliest first.
    fn get_many(connection: &DbPoolConnection) -> Result<Vec<Movie>, diesel::result::Error>;

    /// Retrieve up to [ROW_LIMIT] distinct movies linked to a genre matching `genre_id`
    /// according to `matching`. Nothing matching is an empty list, not an error.
    fn get_by_genre(
        connection: &DbPoolConnection,
        genre_id: &str,
        matching: GenreMatch,
    ) -> Result<Vec<Movie>, diesel::result::Error>;
}

impl MovieActions for Movie {
    fn get_many(connection: &DbPoolConnection) -> Result<Vec<Movie>, Error> {
        many_query().load::<Movie>(&**connection)
    }

    fn get_by_genre(
        connection: &DbPoolConnection,
        genre_id: &str,
        matching: GenreMatch,
    ) -> Result<Vec<Movie>, Error> {
        match by_genre_query(genre_id, matching) {
            Some(query) => query.load::<Movie>(&**connection),
            None => Ok(vec![]),
        }
    }
}

fn many_query(
) -> impl RunQueryDsl<PgConnection> + LoadQuery<PgConnection, Movie> + QueryFragment<Pg> {
    movies::table
        .order((movies::release_date.asc(), movies::id.asc()))
        .limit(ROW_LIMIT)
}

/// `None` when `genre_id` can never match, i.e. it is not an integer under [GenreMatch::Exact].
fn by_genre_query(
    genre_id: &str,
    matching: GenreMatch,
) -> Option<impl RunQueryDsl<PgConnection> + LoadQuery<PgConnection, Movie> + QueryFragment<Pg>>
{
    let query = movies::table
        .inner_join(movies_genres::table)
        .select(movies::all_columns)
        .distinct()
        .order(movies::id.asc())
        .limit(ROW_LIMIT)
        .into_boxed::<Pg>();

    match matching {
        GenreMatch::Substring => Some(query.filter(
            sql::<Text>("CAST(movies_genres.genre_id AS TEXT)").like(contains_pattern(genre_id)),
        )),
        GenreMatch::Exact => match genre_id.parse::<i32>() {
            Ok(parsed) => Some(query.filter(movies_genres::genre_id.eq(parsed))),
            Err(_) => {
                debug!("\"{}\" is not a genre identifier.", genre_id);
                None
            }
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use diesel::debug_query;

    #[test]
    fn many_query_orders_by_release_date_then_id_and_caps_rows() {
        // Act
        let actual = debug_query::<Pg, _>(&many_query()).to_string();

        // Assert
        assert!(actual.contains(r#"ORDER BY "movies"."release_date" ASC, "movies"."id" ASC"#));
        assert!(actual.contains("LIMIT $1"));
        assert!(actual.ends_with("-- binds: [50]"));
    }

    #[test]
    fn by_genre_query_given_substring_matches_cast_identifier_literally() {
        // Act
        let query = by_genre_query("1%", GenreMatch::Substring).unwrap();
        let actual = debug_query::<Pg, _>(&query).to_string();

        // Assert
        assert!(actual.starts_with("SELECT DISTINCT "));
        assert!(actual.contains(r#"INNER JOIN "movies_genres""#));
        assert!(actual.contains("WHERE CAST(movies_genres.genre_id AS TEXT) LIKE $1"));
        assert!(actual.contains(r#"ORDER BY "movies"."id" ASC LIMIT $2"#));
        assert!(actual.ends_with(r#"-- binds: ["%1\\%%", 50]"#));
    }

    #[test]
    fn by_genre_query_given_exact_compares_integer_identifier() {
        // Act
        let query = by_genre_query("12", GenreMatch::Exact).unwrap();
        let actual = debug_query::<Pg, _>(&query).to_string();

        // Assert
        assert!(actual.starts_with("SELECT DISTINCT "));
        assert!(actual.contains(r#"WHERE "movies_genres"."genre_id" = $1"#));
        assert!(!actual.contains("LIKE"));
        assert!(actual.ends_with("-- binds: [12, 50]"));
    }

    #[test]
    fn by_genre_query_given_exact_and_non_integer_identifier_is_none() {
        assert!(by_genre_query("sci-fi", GenreMatch::Exact).is_none());
    }

    #[test]
    fn by_genre_query_given_substring_accepts_non_integer_identifier() {
        assert!(by_genre_query("sci-fi", GenreMatch::Substring).is_some());
    }
}
