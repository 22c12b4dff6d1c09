// MIT License
//
// Copyright (c) 2019 Gregory Meyer
//
// Permission is hereby granted, free of charge, to any person
// obtaining a copy of this software and associated documentation files
// (the "Software"), to deal in the Software without restriction,
// including without limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of the Software,
// and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS
// BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN
// ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Statistic names tracked per player and per team.
//!
//! These are the closed key domains that [`PerfectHasher`] is built for.
//!
//! [`PerfectHasher`]: crate::PerfectHasher

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStat {
    GamesPlayed,
    Goals,
    Assists,
    Tackles,
    Interceptions,
    StarSkill,
    WeakFootAbility,
    Weight,
    Height,
}

impl PlayerStat {
    pub const ALL: [PlayerStat; 9] = [
        PlayerStat::GamesPlayed,
        PlayerStat::Goals,
        PlayerStat::Assists,
        PlayerStat::Tackles,
        PlayerStat::Interceptions,
        PlayerStat::StarSkill,
        PlayerStat::WeakFootAbility,
        PlayerStat::Weight,
        PlayerStat::Height,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerStat::GamesPlayed => "Games Played",
            PlayerStat::Goals => "Goals",
            PlayerStat::Assists => "Assists",
            PlayerStat::Tackles => "Tackles",
            PlayerStat::Interceptions => "Interceptions",
            PlayerStat::StarSkill => "Star Skill",
            PlayerStat::WeakFootAbility => "Weak Foot Ability",
            PlayerStat::Weight => "Weight",
            PlayerStat::Height => "Height",
        }
    }
}

impl fmt::Display for PlayerStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamStat {
    GamesPlayed,
    Points,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalsDifference,
    LastFiveResults,
}

impl TeamStat {
    pub const ALL: [TeamStat; 9] = [
        TeamStat::GamesPlayed,
        TeamStat::Points,
        TeamStat::Wins,
        TeamStat::Draws,
        TeamStat::Losses,
        TeamStat::GoalsFor,
        TeamStat::GoalsAgainst,
        TeamStat::GoalsDifference,
        TeamStat::LastFiveResults,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TeamStat::GamesPlayed => "Games Played",
            TeamStat::Points => "Points",
            TeamStat::Wins => "Wins",
            TeamStat::Draws => "Draws",
            TeamStat::Losses => "Losses",
            TeamStat::GoalsFor => "Goals For",
            TeamStat::GoalsAgainst => "Goals Against",
            TeamStat::GoalsDifference => "Goals Difference",
            TeamStat::LastFiveResults => "Last Five Results",
        }
    }
}

impl fmt::Display for TeamStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
