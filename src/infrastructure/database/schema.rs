diesel::table! {
    documents (id) {
        id -> Integer,
        user_id -> Integer,
        filename -> Text,
        content -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    messages (id) {
        id -> Integer,
        user_id -> Integer,
        message -> Text,
        response -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        email -> Text,
        name -> Nullable<Text>,
        password -> Text,
        created_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(documents, messages, users,);
