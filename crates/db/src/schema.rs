table! {
    genres (id) {
        id -> Int4,
        value -> Text,
    }
}

table! {
    movies (id) {
        id -> Int4,
        title -> Text,
        plot -> Text,
        year -> Nullable<Int4>,
        rating -> Nullable<Float8>,
        image -> Text,
        wikipedia_url -> Nullable<Text>,
        release_date -> Nullable<Date>,
    }
}

table! {
    movies_genres (movie_id, genre_id) {
        movie_id -> Int4,
        genre_id -> Int4,
    }
}

joinable!(movies_genres -> genres (genre_id));
joinable!(movies_genres -> movies (movie_id));

allow_tables_to_appear_in_same_query!(genres, movies, movies_genres,);
