/// Entry of the sample person list.
#[derive(Clone, Copy, Debug)]
pub struct Person {
    pub name: &'static str,
    pub status: &'static str,
    /// Avatar resource id, `None` shows the initial instead.
    pub avatar: Option<u32>,
}

const fn person(name: &'static str, status: &'static str, avatar: u32) -> Person {
    Person {
        name,
        status,
        avatar: if avatar == 0 { None } else { Some(avatar) },
    }
}

pub const PEOPLE: [Person; 22] = [
    person("Alice", "online", 1),
    person("Aris", "available", 2),
    person("Ben", "offline", 3),
    person("Bernie", "online", 4),
    person("Jen", "available", 5),
    person("Jennie", "offline", 0),
    person("Jessie J.", "busy", 1),
    person("josh", "online", 2),
    person("Michele", "available", 0),
    person("Miemie", "online", 4),
    person("Han", "offline", 5),
    person("Aice", "online", 1),
    person("Anna", "available", 2),
    person("Bernard", "offline", 3),
    person("Smith", "online", 4),
    person("Star", "available", 5),
    person("Crystal", "offline", 0),
    person("Jeremy", "busy", 1),
    person("Jordan", "online", 2),
    person("Anne", "available", 0),
    person("Lucy", "online", 4),
    person("Merry", "offline", 5),
];
