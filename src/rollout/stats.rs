// src/rollout/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct RolloutStats {
    /// Episodes end on a miss, so this doubles as the miss count.
    pub episodes_finished: u64,
    pub ep_len: u64,
    pub episode_len_sum: u64,
    pub episode_len_max: u64,

    pub steps_done: u64,
    pub catches: u64,
    pub reward_sum: i64,

    pub t0: Instant,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self {
            episodes_finished: 0,
            ep_len: 0,
            episode_len_sum: 0,
            episode_len_max: 0,
            steps_done: 0,
            catches: 0,
            reward_sum: 0,
            t0: Instant::now(),
        }
    }

    pub fn on_step(&mut self, reward: i32) {
        self.steps_done += 1;
        self.ep_len += 1;
        self.reward_sum += i64::from(reward);
        if reward > 0 {
            self.catches += 1;
        }
    }

    pub fn on_episode_end(&mut self) {
        self.episodes_finished += 1;
        self.episode_len_sum += self.ep_len;
        self.episode_len_max = self.episode_len_max.max(self.ep_len);
        self.ep_len = 0;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn steps_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.steps_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_ep_len(&self) -> f64 {
        if self.episodes_finished > 0 {
            self.episode_len_sum as f64 / self.episodes_finished as f64
        } else {
            0.0
        }
    }

    pub fn catches_per_step(&self) -> f64 {
        if self.steps_done > 0 {
            self.catches as f64 / self.steps_done as f64
        } else {
            0.0
        }
    }

    pub fn reward_per_step(&self) -> f64 {
        if self.steps_done > 0 {
            self.reward_sum as f64 / self.steps_done as f64
        } else {
            0.0
        }
    }

    pub fn live_msg(&self) -> LiveMsg {
        let msg = format!(
            "sps={:.1} eps_done={} avg_ep_len={:.1} max_ep_len={} catches={} catch/step={:.3} reward/step={:.3}",
            self.steps_per_sec(),
            self.episodes_finished,
            self.avg_ep_len(),
            self.episode_len_max,
            self.catches,
            self.catches_per_step(),
            self.reward_per_step(),
        );
        LiveMsg { msg }
    }

    pub fn final_report(&self, policy_name: &str, last_ep_len: u64, last_done: bool) -> FinalReport {
        FinalReport {
            policy: policy_name.to_string(),
            steps_done: self.steps_done,
            elapsed_s: self.elapsed_secs(),
            steps_per_s: self.steps_per_sec(),
            episodes_finished: self.episodes_finished,
            avg_ep_len: self.avg_ep_len(),
            max_ep_len: self.episode_len_max,
            catches: self.catches,
            catches_per_step: self.catches_per_step(),
            reward_per_step: self.reward_per_step(),
            total_reward: self.reward_sum,
            last_ep_len,
            last_done,
        }
    }
}

impl Default for RolloutStats {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct LiveMsg {
    pub msg: String,
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub policy: String,
    pub steps_done: u64,
    pub elapsed_s: f64,
    pub steps_per_s: f64,
    pub episodes_finished: u64,
    pub avg_ep_len: f64,
    pub max_ep_len: u64,
    pub catches: u64,
    pub catches_per_step: f64,
    pub reward_per_step: f64,
    pub total_reward: i64,
    pub last_ep_len: u64,
    pub last_done: bool,
}
