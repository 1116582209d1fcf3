// Announcement board with anonymous replies, newest post first
use super::id::IdGenerator;
use crate::models::{Info, InfoId, Reply};
use chrono::{DateTime, Local, Utc};

const DATE_FORMAT: &str = "%-d/%-m/%Y, %H.%M.%S";

#[derive(Debug, Clone, Default)]
pub struct InfoBoard {
    infos: Vec<Info>,
    ids: IdGenerator,
}

impl InfoBoard {
    pub fn new(infos: Vec<Info>) -> Self {
        let ids = IdGenerator::seeded(
            infos
                .iter()
                .flat_map(|i| std::iter::once(i.id).chain(i.replies.iter().map(|r| r.id))),
        );
        Self { infos, ids }
    }

    pub fn list(&self) -> &[Info] {
        &self.infos
    }

    pub fn get(&self, id: InfoId) -> Option<&Info> {
        self.infos.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Post a new announcement. Blank text posts nothing.
    pub fn post(&mut self, text: &str, now: DateTime<Utc>) -> Option<Info> {
        if text.trim().is_empty() {
            return None;
        }

        let info = Info {
            id: self.ids.next(now),
            date: now.with_timezone(&Local).format(DATE_FORMAT).to_string(),
            text: text.to_string(),
            replies: Vec::new(),
        };
        self.infos.insert(0, info.clone());
        Some(info)
    }

    /// Append a reply to an announcement. Blank text or an unknown id
    /// leaves the board untouched.
    pub fn reply(&mut self, info_id: InfoId, text: &str, now: DateTime<Utc>) -> Option<Reply> {
        if text.trim().is_empty() {
            return None;
        }

        let index = self.infos.iter().position(|i| i.id == info_id)?;
        let reply = Reply {
            id: self.ids.next(now),
            text: text.to_string(),
        };
        self.infos[index].replies.push(reply.clone());
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_post_newest_first() {
        let mut board = InfoBoard::default();
        let first = board.post("Promo Netflix", now()).unwrap();
        let second = board.post("Stok Spotify habis", now()).unwrap();

        assert_eq!(board.list()[0].id, second.id);
        assert_eq!(board.list()[1].id, first.id);
        assert!(!first.date.is_empty());
        assert!(first.replies.is_empty());
    }

    #[test]
    fn test_blank_post_ignored() {
        let mut board = InfoBoard::default();
        assert!(board.post("   ", now()).is_none());
        assert!(board.is_empty());
    }

    #[test]
    fn test_replies_append_in_order() {
        let mut board = InfoBoard::default();
        let info = board.post("Info", now()).unwrap();

        let a = board.reply(info.id, "kapan restock?", now()).unwrap();
        let b = board.reply(info.id, "besok", now()).unwrap();
        assert!(board.reply(info.id, "", now()).is_none());
        assert!(board.reply(info.id, " \t", now()).is_none());
        assert!(board.reply(info.id + 100, "halo", now()).is_none());

        let replies = &board.get(info.id).unwrap().replies;
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].id, a.id);
        assert_eq!(replies[1].id, b.id);
        assert_ne!(a.id, info.id);
    }
}
