//! DDL and fixed statements for the two tables.

pub const CREATE_PETS: &str = r#"
    CREATE TABLE IF NOT EXISTS pets (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        species VARCHAR(50) NOT NULL,
        breed VARCHAR(100),
        age INTEGER,
        description TEXT,
        image_url TEXT,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

pub const CREATE_ADOPTION_REQUESTS: &str = r#"
    CREATE TABLE IF NOT EXISTS adoption_requests (
        id SERIAL PRIMARY KEY,
        pet_id INTEGER NOT NULL REFERENCES pets(id),
        adopter_name VARCHAR(100) NOT NULL,
        adopter_email VARCHAR(100) NOT NULL,
        message TEXT,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

pub const COUNT_PETS: &str = "SELECT COUNT(*) FROM pets";

pub const INSERT_PET: &str = r#"
    INSERT INTO pets (name, species, breed, age, description, image_url)
    VALUES ($1, $2, $3, $4, $5, $6)
"#;

pub const SELECT_PETS: &str = "SELECT * FROM pets ORDER BY created_at DESC";

pub const SELECT_PET_BY_ID: &str = "SELECT * FROM pets WHERE id = $1";

pub const INSERT_ADOPTION: &str = r#"
    INSERT INTO adoption_requests (pet_id, adopter_name, adopter_email, message)
    VALUES ($1, $2, $3, $4)
    RETURNING *
"#;

pub const SELECT_ADOPTIONS: &str = r#"
    SELECT ar.*, p.name AS pet_name
    FROM adoption_requests ar
    JOIN pets p ON ar.pet_id = p.id
    ORDER BY ar.created_at DESC
"#;
