// Record declarations read by the introspector tests. Never compiled.

pub struct Being {
    pub id: i32,
    pub age: Option<i32>,
}

pub struct Nested {
    pub being: Being,
    pub anniversary: Option<u64>,
}

pub struct Twin {
    pub being: Being,
    pub anniversary: Option<u64>,
}

pub struct DoubleNested {
    pub nested: Nested,
}

pub struct OptionalNested {
    pub being: Option<Being>,
    pub anniversary: Option<u64>,
}

pub struct OptionalDoubleNested {
    pub optional_nested: Option<Nested>,
}

pub struct Unsupported {
    pub id: i32,
    pub age: Option<i32>,
    pub created: Time,
}

pub struct SupportedAndUnsupported {
    pub happiness: i64,
    pub first: T1,
    #[parquet(flatten)]
    pub being: Being,
    pub second: Option<T2>,
    pub anniversary: Option<u64>,
}

pub struct Person {
    #[parquet(flatten)]
    pub being: Being,
    pub happiness: i64,
    pub sadness: Option<i64>,
    pub code: String,
    pub funkiness: f32,
    pub lameness: Option<f32>,
    pub keen: Option<bool>,
    pub birthday: u32,
    pub anniversary: Option<u64>,
}

pub struct NewOrderPerson {
    pub happiness: i64,
    pub sadness: Option<i64>,
    pub code: String,
    pub funkiness: f32,
    pub lameness: Option<f32>,
    pub keen: Option<bool>,
    pub birthday: u32,
    #[parquet(flatten)]
    pub being: Being,
    pub anniversary: Option<u64>,
}

pub struct Tagged {
    #[parquet(rename = "id")]
    pub person_id: i32,
    #[parquet = "name"]
    pub full_name: String,
}

pub struct IgnoreMe {
    #[parquet(rename = "id")]
    pub person_id: i32,
    #[parquet(ignore)]
    pub secret: String,
    #[parquet = "-"]
    pub scratch: Option<T1>,
}

pub struct Hobbyist {
    #[parquet(rename = "hobby")]
    pub pastime: Hobby,
    pub scores: Vec<f64>,
}

pub struct Hobby {
    pub name: Option<String>,
    pub difficulty: Option<i32>,
}
