//! 当前规则集的共享持有者
//! 写时复制：重新加载配置时整体换入新的 RuleSet，正在匹配的读者继续使用旧快照

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::rule::RuleSet;
use crate::utils::log::hl_debug;

/// 全局共享的空规则集，避免每个空持有者各自分配
static EMPTY_RULES: Lazy<Arc<RuleSet>> = Lazy::new(|| Arc::new(RuleSet::default()));

/// 规则集持有者
#[derive(Debug)]
pub struct SharedRules {
    current: RwLock<Arc<RuleSet>>,
    generation: AtomicU64,
}

impl SharedRules {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(rules)),
            generation: AtomicU64::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            current: RwLock::new(Arc::clone(&EMPTY_RULES)),
            generation: AtomicU64::new(0),
        }
    }

    /// 获取当前规则集快照，调用期间不受后续替换影响
    pub fn current(&self) -> Arc<RuleSet> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// 换入新规则集，返回被替换的旧规则集
    pub fn replace(&self, rules: RuleSet) -> Arc<RuleSet> {
        self.swap(Arc::new(rules))
    }

    /// 换入已共享的规则集，调用方持有的 `next` 即为生效的那一份
    pub fn swap(&self, next: Arc<RuleSet>) -> Arc<RuleSet> {
        let rule_count = next.len();
        let previous = {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *guard, next)
        };
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        hl_debug!("规则集已替换：第{}代，规则数{}", generation, rule_count);
        previous
    }

    /// 替换次数，宿主可据此判断配置是否变化过
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl Default for SharedRules {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Matcher;
    use crate::rule::RuleStore;

    #[test]
    fn test_empty_holders_share_storage() {
        let a = SharedRules::empty();
        let b = SharedRules::default();
        assert!(Arc::ptr_eq(&a.current(), &b.current()));
        assert!(a.current().is_empty());
        assert_eq!(a.generation(), 0);
    }

    #[test]
    fn test_replace_keeps_old_snapshot_alive() {
        // 测试场景：读者持有旧快照期间发生替换，旧快照内容不变
        let shared = SharedRules::new(RuleSet::new(vec![RuleStore::make_rule(["红"], true)]));
        let old_snapshot = shared.current();

        let previous = shared.replace(RuleSet::new(vec![RuleStore::make_rule(["蓝"], true)]));

        assert!(Arc::ptr_eq(&previous, &old_snapshot));
        assert!(Matcher::should_highlight(&["红宝石"], &*old_snapshot));
        assert!(!Matcher::should_highlight(&["红宝石"], &*shared.current()));
        assert!(Matcher::should_highlight(&["蓝宝石"], &*shared.current()));
        assert_eq!(shared.generation(), 1);
    }

    #[test]
    fn test_swap_installs_given_arc() {
        let shared = SharedRules::empty();
        let next = Arc::new(RuleSet::new(vec![RuleStore::make_rule(["金"], true)]));

        let previous = shared.swap(Arc::clone(&next));

        assert!(previous.is_empty());
        assert!(Arc::ptr_eq(&shared.current(), &next));
        assert_eq!(shared.generation(), 1);
    }

    #[test]
    fn test_concurrent_readers_during_reload() {
        let shared = SharedRules::new(RuleSet::new(vec![RuleStore::make_rule(["金"], true)]));
        let fragments = ["金苹果"];

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..200 {
                        let snapshot = shared.current();
                        let first = Matcher::should_highlight(&fragments, &*snapshot);
                        let second = Matcher::should_highlight(&fragments, &*snapshot);
                        assert_eq!(first, second);
                    }
                });
            }
            scope.spawn(|| {
                for i in 0..50 {
                    let keyword = if i % 2 == 0 { "苹果" } else { "钻石" };
                    shared.replace(RuleSet::new(vec![RuleStore::make_rule([keyword], true)]));
                }
            });
        });

        assert_eq!(shared.generation(), 50);
    }
}
